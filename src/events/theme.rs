use crate::constants::{DEFAULT_THEME, THEME_ATTRIBUTE, THEME_STORAGE_KEY, THEME_TOGGLE_IDS};
use crate::dom;
use crate::handle::SceneHandle;
use crate::toggle::next_theme;

pub fn saved_theme() -> String {
    dom::local_storage()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_THEME.to_string())
}

pub fn apply_document_theme(name: &str) {
    dom::set_root_attribute(THEME_ATTRIBUTE, name);
}

fn persist(name: &str) {
    if let Some(storage) = dom::local_storage() {
        if storage.set_item(THEME_STORAGE_KEY, name).is_err() {
            log::warn!("[theme] could not persist preference");
        }
    }
}

/// Flip light/dark on every toggle click. The current theme is read back from
/// the document, so toggling keeps working when storage is unavailable. The
/// page theme changes even when no scene is mounted.
pub fn wire_toggles(handle: Option<SceneHandle>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for id in THEME_TOGGLE_IDS {
        let handle = handle.clone();
        let wired = dom::add_click_listener(&document, id, move || {
            let next = next_theme(dom::root_attribute(THEME_ATTRIBUTE).as_deref());
            persist(next.as_str());
            apply_document_theme(next.as_str());
            if let Some(h) = &handle {
                h.set_theme(next.as_str());
            }
            log::debug!("[theme] toggled to {}", next.as_str());
        });
        if !wired {
            log::debug!("[theme] no #{id} on this page");
        }
    }
}
