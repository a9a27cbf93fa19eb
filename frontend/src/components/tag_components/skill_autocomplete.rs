//! Skill field: type to search the skill catalog, pick from the dropdown.

use common::tag_collector::TagVariant;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdInfo};

use crate::{components::tag_components::tag_chips::TagChips, data_definitions::page_sessions::AssessmentContext};

#[component]
pub fn SkillAutocompleteField() -> Element {
    let assessment = use_context::<AssessmentContext>();
    let mut session = assessment.session;
    let suggestions = assessment.skill_suggestions;
    let skills_loading = assessment.skills_loading;

    let input_value = use_memo(move || session.read().skills.input().to_string());
    let tags = use_memo(move || session.read().skills.tags().to_vec());
    let on_remove = Callback::new(move |value: String| {
        session.write().skills.remove(&value);
    });

    rsx! {
        div {
            class: "x-question",
            label { class: "x-question-label", "{TagVariant::Skills.label()}" }
            div {
                class: "x-input-row x-autocomplete",
                input {
                    r#type: "text",
                    class: "x-text-input",
                    placeholder: TagVariant::Skills.placeholder(),
                    value: "{input_value}",
                    oninput: move |event: Event<FormData>| {
                        session.write().skills.set_input_text(event.value());
                    },
                }
                if !suggestions.read().is_empty() {
                    ul {
                        class: "x-suggestion-list",
                        for (skill_id, skill_name, picked) in suggestions.read().iter().map(|s| (s.id.to_string(), s.skill_name.clone(), s.skill_name.clone())) {
                            li {
                                key: "{skill_id}",
                                class: "x-suggestion-item",
                                onclick: move |_| {
                                    session.write().skills.commit_from_suggestion(picked.clone());
                                },
                                "{skill_name}"
                            }
                        }
                    }
                }
            }
            if skills_loading() {
                p { class: "x-hint", "Loading skills..." }
            }
            TagChips { tags: tags(), on_remove, stacked: false }
            div {
                class: "x-hint",
                Icon { icon: MdInfo, style: "width: 16px; height: 16px;" }
                p { "Fill out as many as you can" }
            }
        }
    }
}
