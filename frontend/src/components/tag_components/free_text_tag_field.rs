//! Typed-in tag field for job titles and experiences.

use common::tag_collector::TagVariant;
use dioxus::prelude::*;

use crate::{components::tag_components::tag_chips::TagChips, data_definitions::page_sessions::AssessmentContext};

#[component]
pub fn FreeTextTagField(variant: TagVariant) -> Element {
    let assessment = use_context::<AssessmentContext>();
    let mut session = assessment.session;

    let input_value = use_memo(move || session.read().collector(variant).input().to_string());
    let tags = use_memo(move || session.read().collector(variant).tags().to_vec());

    // too short or blank input is silently kept in the box
    let mut commit = move || {
        let added = session.write().collector_mut(variant).commit_from_input();
        if added {
            dioxus::logger::tracing::debug!("{:?}: tag added", variant);
        }
    };
    let on_remove = Callback::new(move |value: String| {
        session.write().collector_mut(variant).remove(&value);
    });

    rsx! {
        div {
            class: "x-question",
            label { class: "x-question-label", "{variant.label()}" }
            div {
                class: "x-input-row",
                input {
                    r#type: "text",
                    class: "x-text-input",
                    placeholder: variant.placeholder(),
                    value: "{input_value}",
                    oninput: move |event: Event<FormData>| {
                        session.write().collector_mut(variant).set_input_text(event.value());
                    },
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            event.prevent_default();
                            commit();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "x-input-button",
                    onclick: move |_| commit(),
                    "Add"
                }
            }
            TagChips { tags: tags(), on_remove, stacked: variant == TagVariant::Experiences }
        }
    }
}
