use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::common::dom;
use site::{
    Catalog, ProjectId,
    modal::{CLOSE_LABEL, FEATURES_HEADING, LIVE_LINK_LABEL, ModalState, TECHNOLOGIES_HEADING},
};

// there is exactly one project modal on the page
pub static PROJECT_MODAL: GlobalSignal<ModalState> = Signal::global(ModalState::default);

pub fn open_project(catalog: &Catalog, id: ProjectId) {
    PROJECT_MODAL.with_mut(|modal| modal.open(catalog, id));
}

pub fn close_project() {
    PROJECT_MODAL.with_mut(ModalState::close);
}

#[component]
pub fn ProjectModal() -> Element {
    // every close path (button, backdrop, escape) only touches the state, and the page
    // overflow follows the state here
    use_effect(move || {
        let overflow = PROJECT_MODAL.read().body_overflow();
        if let Err(err) = dom::set_body_overflow(overflow) {
            warn!("failed to set body overflow: {err:#}");
        }
    });

    let _escape = use_hook(|| {
        // keys that change nothing must not mark the signal dirty
        let listener = dom::on_keydown(|key| {
            if PROJECT_MODAL.peek().dismisses_on(key) {
                PROJECT_MODAL.with_mut(|modal| modal.handle_key(key));
            }
        });

        match listener {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                warn!("escape will not close the project modal: {err:#}");
                None
            }
        }
    });

    let state = *PROJECT_MODAL.read();

    rsx! {
        ProjectModalView { state }
    }
}

#[component]
fn ProjectModalView(state: ModalState) -> Element {
    let catalog = use_context::<Catalog>();
    let project = state.project(&catalog).cloned();

    rsx! {
        div {
            id: "project-modal",
            class: "modal",
            style: "display: {state.display()};",
            // the content below swallows its own clicks, so only the backdrop gets here
            onclick: move |_| close_project(),

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal-close",
                    aria_label: "{CLOSE_LABEL}",
                    onclick: move |_| close_project(),
                    "×"
                }

                div { class: "modal-body",
                    if let Some(project) = project {
                        h2 { "{project.title}" }
                        p { class: "modal-description", "{project.full_description}" }

                        h3 { "{FEATURES_HEADING}" }
                        ul { class: "modal-features",
                            for feature in project.features.iter() {
                                li { "{feature}" }
                            }
                        }

                        h3 { "{TECHNOLOGIES_HEADING}" }
                        div { class: "modal-tech",
                            for tech in project.technologies.iter() {
                                span { class: "tech-tag", "{tech}" }
                            }
                        }

                        div { class: "modal-actions",
                            a {
                                href: "{project.live_url}",
                                class: "btn btn-primary",
                                target: "_blank",
                                rel: "noopener",
                                "{LIVE_LINK_LABEL}"
                            }
                            button {
                                class: "btn btn-outline modal-close",
                                onclick: move |_| close_project(),
                                "{CLOSE_LABEL}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site::{Project, SiteConfig};

    fn fixture() -> Catalog {
        let project = |id, title: &str, features: &[&str]| Project {
            id: ProjectId(id),
            title: title.into(),
            description: format!("{title} in short"),
            full_description: format!("{title} at length"),
            features: features.iter().map(|f| f.to_string()).collect(),
            technologies: vec!["Rust".into(), "WebAssembly".into()],
            live_url: format!("https://example.com/{id}"),
        };

        Catalog::new([
            project(1, "Loja Virtual", &["Carrinho", "Pagamentos", "Estoque"]),
            project(2, "Painel", &["Relatórios"]),
        ])
        .unwrap()
    }

    #[component]
    fn Harness(state: ModalState) -> Element {
        use_context_provider(SiteConfig::default);
        use_context_provider(fixture);

        rsx! {
            ProjectModalView { state }
        }
    }

    fn render(state: ModalState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn open_modal_shows_the_project() {
        let catalog = fixture();
        let mut state = ModalState::default();
        assert!(state.open(&catalog, ProjectId(1)));

        let html = render(state);

        assert!(html.contains("display: flex;"));
        assert!(html.contains("<h2>Loja Virtual</h2>"));
        assert!(html.contains("Loja Virtual at length"));
        assert!(html.contains("https://example.com/1"));
        assert!(!html.contains("Painel"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert_eq!(html.matches("tech-tag").count(), 2);
    }

    #[test]
    fn unknown_project_leaves_the_modal_closed() {
        let catalog = fixture();
        let mut state = ModalState::default();
        assert!(!state.open(&catalog, ProjectId(99)));

        let html = render(state);

        assert_eq!(html, render(ModalState::Closed));
        assert!(html.contains("display: none;"));
        assert!(!html.contains("<h2>"));
        assert!(!html.contains("<li>"));
    }
}
