//! Top navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::{MdAssignment, MdHome, MdWork};
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 64px;
                    padding: 0px 32px;
                    background-color: #1C3D7A;
                    color: white;
                ",

                Link {
                    to: Route::HomePage {},
                    span {
                        style: "color: white; font-size: 22px; font-weight: 600;",
                        "JobMatch"
                    }
                }

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                IconLink { to: Route::AssessmentPage {}, icon: MdAssignment, label: "Assessment" }
                IconLink { to: Route::JobRecommendationPage {}, icon: MdWork, label: "Jobs" }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    let current_route = use_route::<Route>();
    let is_active = current_route == to;
    let border = if is_active { "2px solid white" } else { "2px solid transparent" };
    rsx! {
        Link {
            to: to,
            span {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    color: white;
                    padding: 6px 10px;
                    border-bottom: {border};
                ",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
