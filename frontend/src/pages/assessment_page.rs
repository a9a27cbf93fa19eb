//! Jobs questionnaire page.

use common::{profile::{AssessmentProfile, Degree}, tag_collector::TagVariant};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    components::{suspend_boundary::SuspendWrapper, tag_components::{free_text_tag_field::FreeTextTagField, skill_autocomplete::SkillAutocompleteField}},
    data_definitions::page_sessions::{use_assessment_session_provider, AssessmentContext},
};

#[component]
pub fn AssessmentPage() -> Element {
    let assessment = use_assessment_session_provider();
    let session = assessment.session;
    let mut submitted = use_signal(|| None::<AssessmentProfile>);

    let on_submit = move |event: Event<FormData>| {
        event.prevent_default();
        let profile = session.read().submit();
        tracing::info!("Questionnaire submitted: {:?}", profile);
        submitted.set(Some(profile));
    };

    rsx! {
        Title { "JobMatch - Questionnaire" }
        div {
            id: "x-assessment-container",
            class: "x-assessment-container",
            form {
                class: "x-assessment-card",
                onsubmit: on_submit,
                h1 { class: "x-assessment-title", "Jobs Questionnaire" }
                p {
                    class: "x-assessment-subtitle",
                    "Take our questionnaire so that we can determine which jobs fit you the most"
                }
                SuspendWrapper {
                    FreeTextTagField { variant: TagVariant::JobTitles }
                    YearsOfExperienceField {}
                    SkillAutocompleteField {}
                    DegreeRadioGroup {}
                    FreeTextTagField { variant: TagVariant::Experiences }
                }
                button {
                    r#type: "submit",
                    class: "x-submit-button",
                    "Submit Job Questionnaire"
                }
            }
            if let Some(profile) = submitted() {
                ProfileSummary { profile }
            }
        }
    }
}

#[component]
fn YearsOfExperienceField() -> Element {
    let assessment = use_context::<AssessmentContext>();
    let mut session = assessment.session;
    rsx! {
        div {
            class: "x-question",
            label { class: "x-question-label", "Years of Experience" }
            input {
                r#type: "number",
                min: "0",
                placeholder: "5",
                class: "x-text-input",
                oninput: move |event: Event<FormData>| {
                    session.write().set_years_text(&event.value());
                },
            }
        }
    }
}

#[component]
fn DegreeRadioGroup() -> Element {
    let assessment = use_context::<AssessmentContext>();
    let mut session = assessment.session;
    let selected = use_memo(move || session.read().degree);
    rsx! {
        div {
            class: "x-question",
            label { class: "x-question-label", "Degree" }
            div {
                class: "x-radio-grid",
                for degree in Degree::ALL {
                    div {
                        key: "{degree.input_id()}",
                        class: "x-radio-item",
                        input {
                            r#type: "radio",
                            name: "degree",
                            id: degree.input_id(),
                            value: degree.as_str(),
                            checked: selected() == degree,
                            onchange: move |_| {
                                session.write().degree = degree;
                            },
                        }
                        label { r#for: degree.input_id(), "{degree.as_str()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileSummary(profile: ReadSignal<AssessmentProfile>) -> Element {
    let AssessmentProfile { job_titles, skills, experiences, degree, years_of_experience } = profile.read().clone();
    let years = years_of_experience.map(|y| y.to_string()).unwrap_or("-".to_string());
    let job_titles = job_titles.join(", ");
    let skills = skills.join(", ");
    rsx! {
        div {
            id: "x-profile-summary",
            class: "x-assessment-card",
            h2 { class: "x-assessment-title", "Your Profile" }
            if profile.read().is_empty() {
                p { class: "x-hint", "Nothing filled in yet." }
            }
            dl {
                class: "x-profile-list",
                dt { "Job titles" }
                dd { "{job_titles}" }
                dt { "Years of experience" }
                dd { "{years}" }
                dt { "Skills" }
                dd { "{skills}" }
                dt { "Degree" }
                dd { "{degree.as_str()}" }
                dt { "Experiences" }
                dd {
                    for (index, experience) in experiences.iter().cloned().enumerate() {
                        p { key: "{index}", "{experience}" }
                    }
                }
            }
        }
    }
}
