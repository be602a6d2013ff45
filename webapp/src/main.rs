#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::{Home, PageNotFound};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the site is a single long page; anything else falls through to the not-found view
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // injected rather than global so that every component reads the same parsed copy
    use_context_provider(common::site_config);
    use_context_provider(common::catalog);

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> {}
    }
}
