pub mod dom;
pub mod style;

use chrono::{Datelike, Local};
use tracing::error;

use site::{Catalog, SiteConfig};

const SITE_TOML: &str = include_str!("../../site.toml");
const PROJECTS_TOML: &str = include_str!("../../projects.toml");

// the year shown in every footer
pub fn current_year() -> i32 {
    Local::now().year()
}

// both documents are compiled in, so a failure here is a packaging mistake; log it and
// keep the page usable with defaults rather than refusing to start
pub fn site_config() -> SiteConfig {
    SiteConfig::from_toml(SITE_TOML).unwrap_or_else(|err| {
        error!("failed to parse site config, using defaults: {err:#}");
        SiteConfig::default()
    })
}

pub fn catalog() -> Catalog {
    Catalog::from_toml(PROJECTS_TOML).unwrap_or_else(|err| {
        error!("failed to load project catalog: {err:#}");
        Catalog::default()
    })
}
