use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::carousel::SlideGeometry;

// site configuration
//
// every section is optional in the toml document and falls back to the values the
// markup was designed around
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(doc).context("failed to parse site config")?;

        debug!({ config = ?config }, "parsed site config");

        Ok(config)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_ms: u32,
    pub geometry: SlideGeometry,
    pub slides: Vec<Slide>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            autoplay_ms: 5000,
            geometry: SlideGeometry::default(),
            slides: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub fields: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            submit_delay_ms: 1000,
            fields: ["name", "email", "subject", "message"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

// reveal-on-scroll
//
// threshold and root_margin are handed to the browser's intersection observer unchanged
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub class: String,
    pub selectors: Vec<String>,
}

impl RevealConfig {
    // a single selector list suitable for querySelectorAll
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
            class: String::from("animate-in"),
            selectors: [
                ".benefit-card",
                ".service-card",
                ".project-card",
                ".testimonial-card",
                ".process-step",
                ".value-card",
                ".why-us-card",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            header_selector: String::from(".header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.autoplay_ms, 5000);
        assert_eq!(config.contact.submit_delay_ms, 1000);
        assert_eq!(config.scroll.header_selector, ".header");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [carousel]
            autoplay_ms = 3000
            geometry = { mode = "per-slide" }

            [[carousel.slides]]
            src = "/a.jpg"
            alt = "a"

            [reveal]
            class = "shown"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.autoplay_ms, 3000);
        assert_eq!(config.carousel.geometry, SlideGeometry::PerSlide);
        assert_eq!(config.carousel.slides.len(), 1);
        assert_eq!(config.reveal.class, "shown");
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.selectors.len(), 7);
    }

    #[test]
    fn reveal_selector_is_comma_joined() {
        let reveal = RevealConfig {
            selectors: vec![".a".into(), ".b".into()],
            ..RevealConfig::default()
        };

        assert_eq!(reveal.selector(), ".a, .b");
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = SiteConfig::from_toml("[carousel\nautoplay_ms = ").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));

        assert!(SiteConfig::from_toml("[carousel]\nautoplay_ms = \"soon\"").is_err());
    }
}
