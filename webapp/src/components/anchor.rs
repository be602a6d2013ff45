use dioxus::prelude::*;
use tracing::warn;

use crate::common::dom;
use site::{SiteConfig, scroll};

#[derive(Clone, PartialEq, Props)]
pub struct AnchorLinkProps {
    href: String,
    #[props(default)]
    class: String,
    // runs on every activation, before any scrolling
    onnavigate: Option<EventHandler<()>>,
    children: Element,
}

// an <a> that smooth-scrolls to in-page targets instead of jumping
//
// links that are not "#something" behave like any other anchor
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let header_selector = use_context::<SiteConfig>().scroll.header_selector;
    let onnavigate = props.onnavigate;
    let href = props.href.clone();

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |evt| {
                if let Some(handler) = &onnavigate {
                    handler.call(());
                }

                let Some(target) = scroll::anchor_target(&href) else {
                    return;
                };

                evt.prevent_default();

                if let Err(err) = dom::scroll_below_header(target, &header_selector) {
                    warn!("failed to scroll to #{target}: {err:#}");
                }
            },
            {props.children}
        }
    }
}
