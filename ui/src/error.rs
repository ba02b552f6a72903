//! Error type shared by the navbar's configuration, localization and
//! platform glue. None of these reach the rendered page: callers log them
//! and fall back to defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("failed to parse site config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid site config: {0}")]
    Config(String),

    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error("locale selection failed: {0}")]
    Locale(#[from] i18n_embed::I18nEmbedError),

    #[error("scroll listener unavailable: {0}")]
    Listener(String),

    #[error("keyframes `{name}` mix track lengths {expected} and {found}")]
    TrackLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("keyframes `{0}` need at least two stops")]
    TooFewStops(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
