use tracing::debug;

use crate::catalog::{Catalog, Project, ProjectId};

pub const FEATURES_HEADING: &str = "Funcionalidades Principais";
pub const TECHNOLOGIES_HEADING: &str = "Tecnologias Utilizadas";
pub const LIVE_LINK_LABEL: &str = "Ver SITE";
pub const CLOSE_LABEL: &str = "Fechar";

// project detail modal
//
// there is only ever one modal; opening a different project replaces the content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectId),
}

impl ModalState {
    // unknown ids leave the modal exactly as it was
    pub fn open(&mut self, catalog: &Catalog, id: ProjectId) -> bool {
        if catalog.get(id).is_none() {
            debug!({ project = %id }, "no such project, ignoring");
            return false;
        }

        debug!({ project = %id }, "opening project modal");
        *self = ModalState::Open(id);
        true
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("closing project modal");
        }
        *self = ModalState::Closed;
    }

    // whether a keydown would close the modal, without touching it
    pub fn dismisses_on(&self, key: &str) -> bool {
        key == "Escape" && self.is_open()
    }

    // keydown anywhere on the page; only Escape on an open modal does anything
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.dismisses_on(key) {
            self.close();
            return true;
        }

        false
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn project<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        match self {
            ModalState::Open(id) => catalog.get(*id),
            ModalState::Closed => None,
        }
    }

    pub fn display(&self) -> &'static str {
        if self.is_open() { "flex" } else { "none" }
    }

    // the page behind an open modal must not scroll
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() { "hidden" } else { "auto" }
    }
}
