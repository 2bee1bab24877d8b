//! Dark theme preference: persisted in `localStorage` under a
//! SecureAI-specific key, falling back to the OS color scheme, and applied
//! as a `.dark-mode` class on `<html>` so the stylesheet can branch on it.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "secureai_dark";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// The effective dark-mode preference at startup: the stored value when one
/// exists, otherwise the OS-level color scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
            Some(stored) => stored == "true",
            None => system_prefers_dark(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set or clear the `.dark-mode` class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let result = if enabled {
                classes.add_1("dark-mode")
            } else {
                classes.remove_1("dark-mode")
            };
            if result.is_err() {
                leptos::logging::warn!("could not toggle dark-mode class");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference, apply it, and persist it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
