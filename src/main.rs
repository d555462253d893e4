mod components;

use components::dm_list_view::DmListView;
use components::nav_bar::NavComponent;

use dioxus::prelude::*;

#[derive(Routable, Clone, Debug, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[redirect("/", || Route::DmListView {})]
    #[route("/messages")]
    DmListView {},
}

fn main() {
    init_logging();
    tracing::info!(platform = platform_name(), "launching direct messages client");
    dioxus::launch(App);
}

// Launch calls this again; it is a no-op once a subscriber is set.
fn init_logging() {
    dioxus::logger::initialize_default();
}

fn platform_name() -> &'static str {
    if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "web"
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_messages_route_path() {
        assert_eq!(Route::DmListView {}.to_string(), "/messages");
        assert_eq!(Route::from_str("/messages").ok(), Some(Route::DmListView {}));
    }

    #[test]
    fn test_logging_installed_before_launch() {
        init_logging();
        assert!(tracing::dispatcher::has_been_set());

        // Launch calls the same initializer again.
        init_logging();
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_root_redirects_to_messages() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::DmListView {}));
    }
}
