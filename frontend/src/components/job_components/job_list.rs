//! Filtered job list.

use dioxus::prelude::*;

use crate::{components::{job_components::job_card::JobCard, suspend_boundary::LoadingIndicator}, data_definitions::page_sessions::JobBrowserContext};

#[component]
pub fn JobList() -> Element {
    let browser = use_context::<JobBrowserContext>();
    let session = browser.session;
    let filtered_jobs = browser.filtered_jobs;
    let is_loading = browser.is_loading;
    let catalog_size = use_memo(move || session.read().job_catalog.items().len());

    if is_loading() {
        return rsx! { LoadingIndicator { label: "Loading jobs...".to_string() } };
    }

    let shown = filtered_jobs.read().len();
    rsx! {
        div {
            id: "x-job-list-wrapper",
            class: "x-job-list",
            p { class: "x-job-list-count", "Showing {shown} of {catalog_size} jobs" }
            if shown == 0 {
                div {
                    class: "x-job-list-empty",
                    "No jobs match the current filters."
                }
            }
            ul {
                for (job_key, job) in filtered_jobs.read().iter().map(|j| (j.id.to_string(), j.clone())) {
                    li {
                        key: "{job_key}",
                        JobCard { job }
                    }
                }
            }
        }
    }
}
