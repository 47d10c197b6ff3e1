use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use web_sys::window;

pub const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn flipped(self) -> Self {
        Theme::from_dark(!self.is_dark())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Anything stored that isn't `"dark"` reads as light, the same way the
    /// stored preference has always been interpreted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ThemeError::EmptyPreference);
        }
        Ok(Theme::from_dark(s == "dark"))
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("failed to write preference: {0}")]
    StorageWrite(String),
    #[error("stored preference is empty")]
    EmptyPreference,
    #[error("failed to update root class: {0}")]
    ClassList(String),
}

/// Persistent key-value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The operating system's color-scheme preference.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

/// Where the active theme is mirrored for styling.
pub trait ThemeClass {
    fn has_dark(&self) -> bool;
    fn set_dark(&self, dark: bool) -> Result<(), ThemeError>;
}

/// Resolves, applies and flips the display theme.
///
/// The same service runs once before the first render (`apply_initial`) and
/// backs the header toggle afterwards, so both paths read the stored
/// preference the same way.
pub struct ThemeService<S, C, D> {
    store: S,
    scheme: C,
    root: D,
}

impl<S, C, D> ThemeService<S, C, D>
where
    S: PreferenceStore,
    C: ColorScheme,
    D: ThemeClass,
{
    pub fn new(store: S, scheme: C, root: D) -> Self {
        Self { store, scheme, root }
    }

    pub fn resolve(&self) -> Theme {
        self.store
            .load(THEME_KEY)
            .and_then(|stored| stored.parse().ok())
            .unwrap_or_else(|| Theme::from_dark(self.scheme.prefers_dark()))
    }

    pub fn apply_initial(&self) -> Theme {
        let theme = self.resolve();
        self.mirror(theme);
        theme
    }

    pub fn current(&self) -> Theme {
        Theme::from_dark(self.root.has_dark())
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.mirror(next);
        if let Err(e) = self.store.store(THEME_KEY, next.as_str()) {
            log::warn!("theme preference not saved: {}", e);
        }
        next
    }

    fn mirror(&self, theme: Theme) {
        if let Err(e) = self.root.set_dark(theme.is_dark()) {
            log::warn!("{} theme not applied: {}", theme, e);
        }
    }
}

pub type BrowserThemeService = ThemeService<LocalStorage, MediaQuery, DocumentRoot>;

impl BrowserThemeService {
    pub fn browser() -> Self {
        ThemeService::new(LocalStorage, MediaQuery, DocumentRoot)
    }
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = Self::storage().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| ThemeError::StorageWrite(format!("{:?}", e)))
    }
}

pub struct MediaQuery;

impl ColorScheme for MediaQuery {
    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

pub struct DocumentRoot;

impl DocumentRoot {
    fn class_list() -> Option<web_sys::DomTokenList> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.class_list())
    }
}

impl ThemeClass for DocumentRoot {
    fn has_dark(&self) -> bool {
        Self::class_list()
            .map(|classes| classes.contains(DARK_CLASS))
            .unwrap_or(false)
    }

    fn set_dark(&self, dark: bool) -> Result<(), ThemeError> {
        let classes = Self::class_list()
            .ok_or_else(|| ThemeError::ClassList("document has no root element".to_string()))?;
        classes
            .toggle_with_force(DARK_CLASS, dark)
            .map(|_| ())
            .map_err(|e| ThemeError::ClassList(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        disabled: bool,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.into(), value.into());
            store
        }

        fn disabled() -> Self {
            Self {
                disabled: true,
                ..Self::default()
            }
        }
    }

    impl PreferenceStore for &MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn store(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            if self.disabled {
                return Err(ThemeError::StorageUnavailable);
            }
            self.values.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }
    }

    struct Scheme(bool);

    impl ColorScheme for Scheme {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct Root(Cell<bool>);

    impl ThemeClass for &Root {
        fn has_dark(&self) -> bool {
            self.0.get()
        }

        fn set_dark(&self, dark: bool) -> Result<(), ThemeError> {
            self.0.set(dark);
            Ok(())
        }
    }

    /// A document whose class list can't be written.
    struct Detached;

    impl ThemeClass for Detached {
        fn has_dark(&self) -> bool {
            false
        }

        fn set_dark(&self, _: bool) -> Result<(), ThemeError> {
            Err(ThemeError::ClassList("no root".to_string()))
        }
    }

    #[test]
    fn stored_preference_wins_over_os() {
        let store = MemoryStore::with(THEME_KEY, "light");
        let root = Root::default();
        let service = ThemeService::new(&store, Scheme(true), &root);

        assert_eq!(service.apply_initial(), Theme::Light);
        assert!(!root.0.get());
    }

    #[test]
    fn falls_back_to_os_when_nothing_stored() {
        let store = MemoryStore::default();
        let root = Root::default();
        let service = ThemeService::new(&store, Scheme(true), &root);

        assert_eq!(service.apply_initial(), Theme::Dark);
        assert!(root.0.get());
    }

    #[test]
    fn empty_stored_value_falls_back_to_os() {
        let store = MemoryStore::with(THEME_KEY, "");
        let root = Root::default();
        let service = ThemeService::new(&store, Scheme(true), &root);

        assert_eq!(service.resolve(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_reads_as_light() {
        let store = MemoryStore::with(THEME_KEY, "sepia");
        let root = Root::default();
        let service = ThemeService::new(&store, Scheme(true), &root);

        assert_eq!(service.resolve(), Theme::Light);
    }

    #[test]
    fn current_reads_the_class_not_storage() {
        let store = MemoryStore::with(THEME_KEY, "light");
        let root = Root(Cell::new(true));
        let service = ThemeService::new(&store, Scheme(false), &root);

        assert_eq!(service.current(), Theme::Dark);
    }

    #[test]
    fn toggle_twice_restores_class_and_storage() {
        let store = MemoryStore::with(THEME_KEY, "dark");
        let root = Root::default();
        let service = ThemeService::new(&store, Scheme(false), &root);
        service.apply_initial();

        assert_eq!(service.toggle(), Theme::Light);
        assert_eq!(store.values.borrow()[THEME_KEY], "light");
        assert!(!root.0.get());

        assert_eq!(service.toggle(), Theme::Dark);
        assert_eq!(store.values.borrow()[THEME_KEY], "dark");
        assert!(root.0.get());
    }

    #[test]
    fn toggle_still_flips_class_without_storage() {
        let store = MemoryStore::disabled();
        let root = Root::default();
        let service = ThemeService::new(&store, Scheme(false), &root);

        assert_eq!(service.toggle(), Theme::Dark);
        assert!(root.0.get());
        assert!(store.values.borrow().is_empty());
    }

    #[test]
    fn unwritable_class_list_still_persists_choice() {
        let store = MemoryStore::default();
        let service = ThemeService::new(&store, Scheme(false), Detached);

        assert_eq!(service.apply_initial(), Theme::Light);
        assert_eq!(service.toggle(), Theme::Dark);
        assert_eq!(store.values.borrow()[THEME_KEY], "dark");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!("".parse::<Theme>(), Err(ThemeError::EmptyPreference)));
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }
}
