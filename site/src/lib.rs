// client-side core for the portfolio site
//
// nothing in this crate touches the DOM.  the webapp owns the bindings and calls into
// these types from event handlers, which keeps the validation rules, carousel arithmetic
// and modal bookkeeping testable without a browser
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod form;
pub mod hover;
pub mod modal;
pub mod nav;
pub mod scroll;

pub use catalog::{Catalog, Project, ProjectId};
pub use config::SiteConfig;
