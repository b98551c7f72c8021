//! Light/dark theme preference

use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StoreResult};

/// Storage key of the theme preference
pub const THEME_KEY: &str = "kaws-theme";

/// Body class applied in light mode
pub const LIGHT_MODE_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Read a stored value; anything but `"light"` is dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Toggle button label: what clicking switches to
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "💡",
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }
}

/// Load the persisted theme, dark when absent
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

/// Flip the theme and persist the new value
pub fn toggle_theme(store: &mut impl KeyValueStore, current: Theme) -> StoreResult<Theme> {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str())?;
    tracing::debug!(theme = next.as_str(), "Theme toggled");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::storage::MemoryStore;

    #[test]
    fn test_defaults_to_dark() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_value_and_icon() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        let original = load_theme(&store);
        let original_icon = original.icon();

        let once = toggle_theme(&mut store, original).unwrap();
        assert_eq!(once, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(once.icon(), "💡");

        let twice = toggle_theme(&mut store, once).unwrap();
        assert_eq!(twice, original);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(twice.icon(), original_icon);
    }
}
