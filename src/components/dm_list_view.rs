use dioxus::prelude::*;

pub const DM_TITLE: &str = "Your Messages";
pub const DM_DESCRIPTION: &str =
    "When you start messaging friends, your conversations will appear here.";
pub const DM_TIP: &str = "Tip: Direct messages are only between friends.";

/// Placeholder shown at the direct messages route until conversations exist.
#[component]
pub fn DmListView() -> Element {
    rsx! {
        section { id: "dm-list", class: "max-w-2xl mx-auto p-6",
            h1 { class: "text-2xl font-bold text-[var(--text-primary)] mb-2", "{DM_TITLE}" }
            p { class: "text-[var(--text-secondary)] mb-6", "{DM_DESCRIPTION}" }
            div { class: "border border-[var(--border-default)] rounded-lg bg-[var(--bg-elevated)] p-4",
                p { class: "text-sm text-[var(--text-muted-on-elevated)]", "{DM_TIP}" }
            }
        }
    }
}
