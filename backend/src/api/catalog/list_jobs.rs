use common::catalog::JobItem;

use crate::provider_utils::{catalog_client::{CatalogClient, get_catalog_client}, decode_records::decode_records};

pub const JOBS_ENDPOINT: &str = "jobs";

pub async fn list_jobs() -> anyhow::Result<Vec<JobItem>> {
    list_jobs_from(&get_catalog_client()).await
}

pub async fn list_jobs_from(client: &CatalogClient) -> anyhow::Result<Vec<JobItem>> {
    let records = client.fetch_array(JOBS_ENDPOINT).await?;
    Ok(decode_records(JOBS_ENDPOINT, records))
}
