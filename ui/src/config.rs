//! Site configuration.
//!
//! The settings live in `site.toml` next to the crate manifest and are embedded
//! at compile time, so the web build never fetches them. Every field has a
//! default; a broken file falls back to those defaults with a warning.

use serde::Deserialize;

use crate::core::scroll::DEFAULT_THRESHOLD_PX;
use crate::error::{Result, UiError};
use crate::i18n::FALLBACK_LOCALE;

const EMBEDDED_SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

/// Settings consumed by the navbar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name shown next to the logo.
    pub brand: String,
    /// Locale the site is rendered in (must be one of the embedded bundles).
    pub locale: String,
    /// Scroll offset (px) past which the header switches to its opaque style.
    pub scroll_threshold_px: f64,
    /// Internal path the call-to-action button links to.
    pub cta_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "J&C Studios".to_string(),
            locale: FALLBACK_LOCALE.to_string(),
            scroll_threshold_px: DEFAULT_THRESHOLD_PX,
            cta_href: "/contacto".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled `site.toml`, or defaults if it does not parse.
    pub fn embedded() -> Self {
        match Self::from_toml(EMBEDDED_SITE_TOML) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "embedded site.toml rejected, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(UiError::Config(format!(
                "scroll_threshold_px must be a finite, non-negative number (got {})",
                self.scroll_threshold_px
            )));
        }
        if !self.cta_href.starts_with('/') {
            return Err(UiError::Config(format!(
                "cta_href must be an internal path (got `{}`)",
                self.cta_href
            )));
        }
        if self.brand.trim().is_empty() {
            return Err(UiError::Config("brand must not be empty".to_string()));
        }
        Ok(())
    }
}
