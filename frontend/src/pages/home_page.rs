use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdAssignment, MdWork};
use dioxus_free_icons::{Icon, IconShape};

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "JobMatch - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            MainTitle {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                HomeCard {
                    to: Route::AssessmentPage {},
                    icon: MdAssignment,
                    title: "Jobs Questionnaire",
                    description: "Tell us your job titles, skills, degree and experience so we can work out which jobs fit you the most.",
                    background: "linear-gradient(135deg, #1C3D7A 0%, #3A6FD8 100%)",
                }
                HomeCard {
                    to: Route::JobRecommendationPage {},
                    icon: MdWork,
                    title: "Browse Jobs",
                    description: "Search the job catalog by title and narrow it down by working model, working time and job level.",
                    background: "linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%)",
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#1C3D7A;", "JobMatch!" }
        }
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Build your profile, then find the openings that match it."
        }
    }
}

#[component]
fn HomeCard<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, title: String, description: String, background: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 420px;
                    min-height: 220px;
                    border-radius: 22px;
                    padding: 22px 22px 26px 22px;
                    background: {background};
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "display:flex; align-items:center; gap: 10px; font-size: 28px; font-weight: 500;",
                    Icon { icon: icon, style: "width: 30px; height: 30px;" }
                    "{title}"
                }
                div {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        line-height: 1.5;
                        color: rgba(255,255,255,0.92);
                    ",
                    "{description}"
                }
            }
        }
    }
}
