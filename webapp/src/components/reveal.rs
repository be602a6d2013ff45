use dioxus::prelude::*;
use tracing::warn;

use crate::common::dom::{self, RevealObserver};
use site::SiteConfig;

// fade cards in the first time they scroll into view
//
// call from the component that renders the cards; the observer is attached once the
// page is mounted and released with the component
pub fn use_reveal_on_scroll() {
    let reveal = use_context::<SiteConfig>().reveal;
    let mut observer = use_signal(|| None::<RevealObserver>);

    use_effect(move || match dom::observe_reveal(&reveal) {
        Ok(found) => observer.set(found),
        Err(err) => warn!("reveal animations disabled: {err:#}"),
    });
}
