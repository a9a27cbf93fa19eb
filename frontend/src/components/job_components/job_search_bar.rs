use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::page_sessions::JobBrowserContext;

/// Title search box. The job list follows every keystroke; the button and the
/// Enter key only force the same recomputation.
#[component]
pub fn JobSearchBar() -> Element {
    let browser = use_context::<JobBrowserContext>();
    let mut session = browser.session;
    let search_text = use_memo(move || session.read().engine.search_query().to_string());
    // after a reset the list ignores the leftover text until the next edit
    let is_reset = use_memo(move || session.read().engine.is_reset() && !session.read().engine.search_query().is_empty());
    let search_button_color = use_memo(move || if is_reset() { "#1C3D7A" } else { "#6B7280" });

    let mut trigger_search = move || {
        session.write().engine.apply();
    };
    let search_oninput = move |event: Event<FormData>| {
        session.write().engine.set_search_query(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search();
        }
    };

    rsx! {
        div {
            id: "x-job-search-box",
            class: "x-search-box",
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| trigger_search(),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search job titles",
                class: "x-search-input",
                value: "{search_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
