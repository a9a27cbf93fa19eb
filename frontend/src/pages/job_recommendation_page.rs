//! Job recommendations page: filter panel on the left, search and results on the right.

use dioxus::prelude::*;

use crate::{
    components::{job_components::{job_filter_panel::JobFilterPanel, job_list::JobList, job_search_bar::JobSearchBar}, suspend_boundary::SuspendWrapper},
    data_definitions::page_sessions::use_job_browser_session_provider,
};

#[component]
pub fn JobRecommendationPage() -> Element {
    let _browser = use_job_browser_session_provider();

    rsx! {
        Title { "JobMatch - Jobs" }
        div {
            id: "x-job-page-root",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                border-top: 2px solid #A9C2F0;
            ",
            div {
                id: "x-job-page-left-panel",
                style: "
                    width: 256px;
                    flex-shrink: 0;
                    border-right: 2px solid #A9C2F0;
                ",
                SuspendWrapper { JobFilterPanel {} }
            }
            div {
                id: "x-job-page-right-panel",
                style: "
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                    min-width: 300px;
                    padding: 16px;
                    gap: 16px;
                ",
                JobSearchBar {}
                SuspendWrapper { JobList {} }
            }
        }
    }
}
