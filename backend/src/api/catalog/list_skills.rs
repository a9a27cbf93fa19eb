use common::catalog::SkillItem;

use crate::provider_utils::{catalog_client::{CatalogClient, get_catalog_client}, decode_records::decode_records};

pub const SKILLS_ENDPOINT: &str = "skills";

pub async fn list_skills() -> anyhow::Result<Vec<SkillItem>> {
    list_skills_from(&get_catalog_client()).await
}

pub async fn list_skills_from(client: &CatalogClient) -> anyhow::Result<Vec<SkillItem>> {
    let records = client.fetch_array(SKILLS_ENDPOINT).await?;
    Ok(decode_records(SKILLS_ENDPOINT, records))
}
