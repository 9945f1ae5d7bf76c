//! Explicit app-wide theme setting.
//!
//! `None` follows the system preference; `Some("light")`/`Some("dark")`
//! pin it. The choice is persisted under its own storage key (separate
//! from the modification log, and the only other durable state the app
//! touches) and applied by writing the `data-theme` attribute on the
//! document element. The signal lives in context so views toggle an
//! injected setting instead of poking ambient document state.

use dioxus::prelude::*;

/// Storage key for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "userdesk.theme";

/// Context signal: `None` = system, `Some("light")`, `Some("dark")`.
pub type ThemeSignal = Signal<Option<String>>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Read the persisted preference into the signal and apply it. Called
/// once from the app root on startup.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let stored = read_preference();
    apply_theme(stored.as_deref());
    theme.set(stored);
}

/// Persist a new preference and apply it immediately.
pub fn set_theme(theme: &mut ThemeSignal, value: Option<&str>) {
    write_preference(value);
    apply_theme(value);
    theme.set(value.map(str::to_string));
}

/// Reflect the preference onto the document element.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(value: Option<&str>) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match value {
        Some(theme) => {
            let _ = root.set_attribute("data-theme", theme);
        }
        None => {
            let _ = root.remove_attribute("data-theme");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_value: Option<&str>) {}

#[cfg(target_arch = "wasm32")]
fn read_preference() -> Option<String> {
    use store::KeyValueStore;
    store::LocalStorageKv::new().get(THEME_STORAGE_KEY)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_preference() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_preference(value: Option<&str>) {
    use store::KeyValueStore;
    let kv = store::LocalStorageKv::new();
    match value {
        Some(theme) => kv.set(THEME_STORAGE_KEY, theme),
        None => kv.remove(THEME_STORAGE_KEY),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_preference(_value: Option<&str>) {}
