//! Left-hand job filter: one checkbox group per facet category and a reset button.

use common::facets::{count_facet_value, FacetCategory, FacetValue};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::page_sessions::JobBrowserContext;

#[component]
pub fn JobFilterPanel() -> Element {
    let browser = use_context::<JobBrowserContext>();
    let mut session = browser.session;
    let active_facets = use_memo(move || session.read().engine.selection().active_count());

    rsx! {
        div {
            id: "x-job-filter-panel",
            class: "x-filter-panel",
            div {
                class: "x-filter-header",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    Icon { icon: MdFilterList, style: "width: 26px; height: 26px;" }
                    p { style: "font-weight: 700; font-size: 14px;", "Job Filter" }
                    if active_facets() > 0 {
                        span { class: "x-filter-badge", "{active_facets}" }
                    }
                }
                button {
                    class: "x-pill-button",
                    onclick: move |_| {
                        dioxus::logger::tracing::debug!("Job filter reset");
                        session.write().engine.clear_all();
                    },
                    "Reset"
                }
            }
            for category in FacetCategory::ALL {
                FacetGroup { key: "{category.field_name()}", category }
            }
        }
    }
}

#[component]
fn FacetGroup(category: FacetCategory) -> Element {
    let browser = use_context::<JobBrowserContext>();
    let session = browser.session;
    let is_filtered = use_memo(move || session.read().engine.selection().category_is_filtered(category));
    let title_color = if is_filtered() { "#1C3D7A" } else { "#111827" };

    rsx! {
        div {
            id: "x-facet-{category.field_name()}",
            class: "x-facet-group",
            h5 {
                style: "font-weight: 600; font-size: 14px; color: {title_color};",
                "{category.display_name()}"
            }
            div {
                class: "x-facet-options",
                for value in category.options() {
                    FacetCheckbox { key: "{value.label()}", value }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(value: FacetValue) -> Element {
    let browser = use_context::<JobBrowserContext>();
    let mut session = browser.session;
    let is_checked = use_memo(move || session.read().engine.is_checked(value));
    let result_count = use_memo(move || count_facet_value(session.read().job_catalog.items(), value));

    rsx! {
        div {
            class: "x-facet-list-item",
            onclick: move |_e| {
                let now_checked = session.write().engine.toggle_facet(value);
                dioxus::logger::tracing::debug!("Facet {:?} checked: {}", value, now_checked);
            },

            // FACET CHECKBOX
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #1C3D7A; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: black; flex-shrink: 0;" }
            }
            // FACET NAME
            span { class: "x-facet-label", "{value.label()}" }

            // FACET SPACER
            div { style: "flex: 1 1 auto;" }

            // FACET COUNT
            span { class: "x-facet-count", "{result_count}" }
        }
    }
}
