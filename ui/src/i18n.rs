//! Internationalization support for `jcstudios-ui`.
//!
//! Wires together `i18n-embed` (language selection + asset loading),
//! `rust-embed` (compile-time embedding of the `.ftl` bundles) and
//! `i18n-embed-fl` (the compile-time checked `fl!` macro).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es-ES/jcstudios_ui.ftl   (fallback/reference)
//!   en-US/jcstudios_ui.ftl
//! ```
//!
//! The site renders in the locale named by `SiteConfig::locale`, not the
//! visitor's browser languages. Call `init` once with that tag before the
//! first lookup; later calls are no-ops.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::error::{Result, UiError};

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared loader.
///
/// ```ignore
/// let cta = t!("nav-cta");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the bundle file in every locale is `{DOMAIN}.ftl`.
const DOMAIN: &str = "jcstudios_ui";

/// Locale whose bundle every other locale is checked against.
pub const FALLBACK_LOCALE: &str = "es-ES";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundle for `locale` (idempotent). An unknown locale falls back
/// to `es-ES`.
pub fn init(locale: &str) {
    INIT.call_once(|| {
        if let Err(err) = set_language(locale) {
            tracing::warn!(%err, locale, "falling back to {FALLBACK_LOCALE}");
            if let Err(err) = LOADER.load_fallback_language(&Localizations) {
                tracing::error!(%err, "fallback locale bundle failed to load");
            }
        }
    });
}

/// Switch language at runtime. Only embedded locales are accepted.
pub fn set_language(tag: &str) -> Result<()> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| UiError::UnknownLocale(tag.to_string()))?;
    if !available_languages().iter().any(|l| l == tag) {
        return Err(UiError::UnknownLocale(tag.to_string()));
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    tracing::debug!(locale = tag, "locale selected");
    Ok(())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
