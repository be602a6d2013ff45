pub mod anchor;
pub mod carousel;
pub mod contact;
pub mod hover;
pub mod modal;
pub mod navigation;
pub mod reveal;
