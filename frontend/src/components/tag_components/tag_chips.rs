//! Removable chips for a tag list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

/// `stacked` renders one full-width row per tag (used for long experience entries).
#[component]
pub fn TagChips(tags: ReadSignal<Vec<String>>, on_remove: Callback<String>, stacked: bool) -> Element {
    let wrapper_class = if stacked { "x-tag-rows" } else { "x-tag-chips" };
    let chip_class = if stacked { "x-tag-row" } else { "x-tag-chip" };
    rsx! {
        div {
            class: wrapper_class,
            // duplicates are allowed, so the position is part of the key
            for (index, tag, removed) in tags.read().iter().enumerate().map(|(i, t)| (i, t.clone(), t.clone())) {
                span {
                    key: "{index}-{tag}",
                    class: chip_class,
                    "{tag}"
                    span {
                        class: "x-tag-remove",
                        title: "Remove",
                        onclick: move |_| on_remove(removed.clone()),
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}
