#![forbid(unsafe_code)]

//! Theme context and preference persistence.
//!
//! The active theme is explicit state owned by the host: a [`ThemeContext`]
//! holds the current [`Theme`] behind a lock-free [`ArcSwap`] handle and
//! persists the selection through an injected [`PreferenceStore`]. There is
//! no ambient global and no implicit storage backend.
//!
//! # Invariants
//!
//! 1. `current()` always reflects the most recent successful `set_theme`.
//! 2. A persistence failure never rolls back the in-memory selection; the
//!    error is returned and the next successful `set_theme` re-persists.
//! 3. An unrecognized or missing persisted value falls back to the default
//!    theme without erroring.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;

use crate::theme::{Theme, ThemeId};

/// Well-known preference key for the current theme name.
pub const THEME_KEY: &str = "proton-ui.theme";

// ---------------------------------------------------------------------------
// Preference store
// ---------------------------------------------------------------------------

/// Errors raised by preference storage.
#[derive(Debug)]
pub enum PreferenceError {
    /// The backing store cannot be used in this environment.
    Unavailable(String),
    /// I/O failure in a file-backed store.
    Io(std::io::Error),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "preference store unavailable: {msg}"),
            Self::Io(err) => write!(f, "preference store i/o error: {err}"),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<std::io::Error> for PreferenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Synchronous key-value persistence for a single preference string.
///
/// Implementations are injected into [`ThemeContext`]; the library never
/// reaches for ambient storage itself.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: Mutex::new(values),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self
            .values
            .lock()
            .map_err(|_| PreferenceError::Unavailable("preference mutex poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| PreferenceError::Unavailable("preference mutex poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding one `key<TAB>value` line per entry.
///
/// The whole file is rewritten on every save; with a single preference key
/// that is one short line. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Create a store backed by `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<(String, String)>, PreferenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(text
            .lines()
            .filter_map(|line| {
                line.split_once('\t')
                    .map(|(key, value)| (key.to_string(), value.to_string()))
            })
            .collect())
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self
            .read_entries()?
            .into_iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if key.contains(['\t', '\n']) || value.contains('\n') {
            return Err(PreferenceError::Unavailable(
                "keys and values may not contain tabs or newlines".into(),
            ));
        }
        let mut entries = self.read_entries()?;
        match entries.iter_mut().find(|(stored, _)| stored == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut text = String::new();
        for (key, value) in &entries {
            text.push_str(key);
            text.push('\t');
            text.push_str(value);
            text.push('\n');
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Theme context
// ---------------------------------------------------------------------------

/// The host-owned theme selection.
///
/// Reads are lock-free (`current()` loads an [`Arc<Theme>`] snapshot);
/// writes swap the handle and persist the theme name.
pub struct ThemeContext {
    current: ArcSwap<Theme>,
    id: Mutex<ThemeId>,
    store: Box<dyn PreferenceStore>,
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme_id", &self.theme_id())
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    /// Create a context, restoring the persisted selection.
    ///
    /// A missing, unreadable, or unrecognized persisted value falls back to
    /// [`ThemeId::default`].
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let id = match store.load(THEME_KEY) {
            Ok(Some(name)) => ThemeId::from_name(&name).unwrap_or_else(|| {
                tracing::debug!(
                    target: "proton.style",
                    value = %name,
                    "unrecognized persisted theme, falling back to default"
                );
                ThemeId::default()
            }),
            Ok(None) => ThemeId::default(),
            Err(err) => {
                tracing::debug!(
                    target: "proton.style",
                    error = %err,
                    "preference store unreadable, falling back to default theme"
                );
                ThemeId::default()
            }
        };
        Self {
            current: ArcSwap::from_pointee(Theme::from_id(id)),
            id: Mutex::new(id),
            store,
        }
    }

    /// Snapshot of the active theme.
    #[must_use]
    pub fn current(&self) -> Arc<Theme> {
        self.current.load_full()
    }

    /// The active theme id.
    #[must_use]
    pub fn theme_id(&self) -> ThemeId {
        match self.id.lock() {
            Ok(id) => *id,
            // A poisoned id mutex cannot corrupt the copy inside.
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Activate `id` and persist its name under [`THEME_KEY`].
    ///
    /// The in-memory swap always takes effect; a persistence failure is
    /// returned to the caller.
    pub fn set_theme(&self, id: ThemeId) -> Result<(), PreferenceError> {
        self.current.store(Arc::new(Theme::from_id(id)));
        match self.id.lock() {
            Ok(mut slot) => *slot = id,
            Err(poisoned) => *poisoned.into_inner() = id,
        }
        tracing::debug!(target: "proton.style", theme = id.name(), "theme activated");
        self.store.save(THEME_KEY, id.name())
    }

    /// Switch to the opposite-brightness theme.
    pub fn toggle(&self) -> Result<(), PreferenceError> {
        self.set_theme(self.theme_id().counterpart())
    }
}
