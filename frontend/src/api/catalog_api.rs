//! Client API calls for the catalog endpoints.

use common::catalog::{JobItem, SkillItem};
use dioxus::prelude::*;


#[server]
pub async fn fetch_skill_catalog() -> Result<Vec<SkillItem>, ServerFnError> {
    let x = backend::api::catalog::list_skills().await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 502, details: None })
}

#[server]
pub async fn fetch_job_catalog() -> Result<Vec<JobItem>, ServerFnError> {
    let x = backend::api::catalog::list_jobs().await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 502, details: None })
}
