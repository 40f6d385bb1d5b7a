use crate::constants::DEFAULT_THEME;
use scales_core::Theme;

/// Theme a toggle click switches to, given the page's current
/// `data-bs-theme` value. A page without the attribute counts as the default.
pub fn next_theme(document_theme: Option<&str>) -> Theme {
    Theme::from_name(document_theme.unwrap_or(DEFAULT_THEME)).toggled()
}
