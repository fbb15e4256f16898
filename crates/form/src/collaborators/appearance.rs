//! System appearance queries.

/// Reports whether a dark color scheme is currently preferred.
pub trait AppearanceQuery {
    fn prefers_dark(&self) -> bool;
}

/// A fixed answer, for hosts that already know the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedAppearance(pub bool);

impl AppearanceQuery for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Reads the `COLORFGBG` terminal convention (`"<fg>;<bg>"`).
///
/// Background palette indices 0-6 and 8 are dark colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAppearance {
    var: String,
}

impl EnvAppearance {
    pub const DEFAULT_VAR: &'static str = "COLORFGBG";

    /// Reads a different variable with the same format.
    #[must_use]
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvAppearance {
    fn default() -> Self {
        Self::with_var(Self::DEFAULT_VAR)
    }
}

impl AppearanceQuery for EnvAppearance {
    fn prefers_dark(&self) -> bool {
        std::env::var(&self.var).is_ok_and(|raw| colorfgbg_is_dark(&raw))
    }
}

/// Interprets a `COLORFGBG` value; the background is the last segment.
#[must_use]
pub fn colorfgbg_is_dark(raw: &str) -> bool {
    raw.rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 0..=6 | 8))
}
