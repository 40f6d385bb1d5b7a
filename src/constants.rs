// DOM contract and persisted-preference keys for the web front-end.

pub const CONTAINER_ID: &str = "hero";
pub const CANVAS_ID: &str = "three-canvas";

/// Header toggle and its desktop twin; both flip the same preference.
pub const THEME_TOGGLE_IDS: [&str; 2] = ["theme-toggle", "theme-toggle-desktop"];

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const DEFAULT_THEME: &str = "light";
