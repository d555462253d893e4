use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container",
                    div { class: "nav-logo",
                        div { class: "logo-icon" }
                        span { class: "logo-text", "SuperApp" }
                    }

                    div { class: "nav-links",
                        Link {
                            to: Route::DmListView {},
                            class: "nav-link",
                            active_class: "active",
                            "Messages"
                        }
                    }
                }
            }

            div { class: "fixed-header-spacer" }

            div { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
