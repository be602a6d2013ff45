use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{
    Route,
    common::{current_year, dom},
    components::{anchor::AnchorLink, hover::FloatingButtons},
};
use site::nav::NavMenu;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#inicio", "Início"),
    ("#sobre", "Sobre"),
    ("#servicos", "Serviços"),
    ("#projetos", "Projetos"),
    ("#depoimentos", "Depoimentos"),
    ("#contato", "Contato"),
];

#[component]
pub fn NavBar() -> Element {
    let mut menu = use_signal(NavMenu::default);
    let year = current_year();

    // listens on the document so that clicks outside the app root count too
    let _outside = use_hook(|| {
        let listener = dom::on_click(move |event| {
            let in_toggle = dom::event_within(&event, "nav-toggle");
            let in_menu = dom::event_within(&event, "nav-menu");

            if menu.peek().closes_on_click(in_toggle, in_menu) {
                menu.with_mut(NavMenu::close);
            }
        });

        match listener {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                warn!("outside clicks will not close the menu: {err:#}");
                None
            }
        }
    });

    rsx! {
        div {
            class: "page",

            header { class: "header",
                div { class: "container",
                    AnchorLink { href: "#inicio", class: "logo", "SyntaxTeam" }

                    button {
                        id: "nav-toggle",
                        class: menu.read().class("nav-toggle"),
                        aria_label: "Abrir menu",
                        onclick: move |_| menu.with_mut(NavMenu::toggle),
                        span {}
                        span {}
                        span {}
                    }

                    nav {
                        ul {
                            id: "nav-menu",
                            class: menu.read().class("nav-menu"),
                            for (href, label) in NAV_LINKS {
                                li {
                                    AnchorLink {
                                        href: "{href}",
                                        onnavigate: move |_| menu.with_mut(NavMenu::close),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Outlet::<Route> {}

            footer { class: "footer",
                div { class: "container",
                    p { "© {year} SyntaxTeam. Todos os direitos reservados." }
                }
            }

            FloatingButtons {}
        }
    }
}
