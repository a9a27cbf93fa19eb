use common::catalog::JobItem;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdWork, md_communication_icons::MdLocationOn}};

#[component]
pub fn JobCard(job: ReadSignal<JobItem>) -> Element {
    let JobItem {
        job_title,
        job_model,
        job_type,
        job_level,
        company_name,
        location,
        job_description,
        salary,
        posted_at,
        ..
    } = job.read().clone();

    rsx! {
        div {
            class: "x-job-card",
            // Row 1: ICON - TITLE - SPACER - POSTED
            div {
                class: "x-job-card-row",
                Icon { icon: MdWork, style: "width: 22px; height: 22px; color: #1C3D7A; flex-shrink: 0;" }
                span { class: "x-job-card-title", "{job_title}" }
                div { style: "flex: 1 1 auto;" }
                if let Some(posted_at) = posted_at {
                    span { class: "x-job-card-muted", "{posted_at}" }
                }
            }
            // Row 2: COMPANY - LOCATION
            div {
                class: "x-job-card-row",
                if let Some(company_name) = company_name {
                    span { class: "x-job-card-company", "{company_name}" }
                }
                if let Some(location) = location {
                    span {
                        class: "x-job-card-muted",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{location}"
                    }
                }
            }
            // Row 3: FACET CHIPS - SALARY
            div {
                class: "x-job-card-row",
                span { class: "x-job-chip", "{job_model}" }
                span { class: "x-job-chip", "{job_type}" }
                span { class: "x-job-chip", "{job_level}" }
                div { style: "flex: 1 1 auto;" }
                if let Some(salary) = salary {
                    span { class: "x-job-card-company", "{salary}" }
                }
            }
            if let Some(job_description) = job_description {
                p { class: "x-job-card-description", "{job_description}" }
            }
        }
    }
}
