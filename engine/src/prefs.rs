//! Persisted theme preference.
//!
//! One key, one value: a single file under the config dir whose entire
//! content is `auto`, `light`, or `dark`. Absent means first visit (`auto`).
//! Writes go through a temp file + rename so a crash mid-write can never
//! leave a torn value behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use vitrine_types::ThemePreference;

/// Storage boundary for the theme preference.
pub trait PreferenceStore {
    /// `None` when nothing has been stored yet (or the value is unreadable).
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, pref: ThemePreference) -> io::Result<()>;
}

/// File-backed store: the preference is the file's trimmed content.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the standard config dir, or `None` if the platform has no
    /// config dir to offer.
    #[must_use]
    pub fn standard() -> Option<Self> {
        Some(Self::at(crate::config::config_dir()?.join("theme")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<ThemePreference> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read theme preference: {e}");
                return None;
            }
        };

        match content.trim().parse::<ThemePreference>() {
            Ok(pref) => Some(pref),
            Err(e) => {
                // Treat garbage as absent rather than failing startup.
                tracing::warn!(path = %self.path.display(), "Ignoring stored theme preference: {e}");
                None
            }
        }
    }

    fn save(&self, pref: ThemePreference) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(pref.as_str().as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PreferenceStore for Box<dyn PreferenceStore> {
    fn load(&self) -> Option<ThemePreference> {
        self.as_ref().load()
    }

    fn save(&self, pref: ThemePreference) -> io::Result<()> {
        self.as_ref().save(pref)
    }
}

/// In-memory store for tests and environments without a config dir.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Arc<Mutex<Option<ThemePreference>>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<ThemePreference> {
        *self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn save(&self, pref: ThemePreference) -> io::Result<()> {
        *self
            .value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(pref);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use vitrine_types::ThemePreference;

    use super::{FilePreferenceStore, PreferenceStore};

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferenceStore::at(dir.path().join("theme"));

        store.save(ThemePreference::Dark).expect("save");
        assert_eq!(store.load(), Some(ThemePreference::Dark));

        store.save(ThemePreference::Auto).expect("overwrite");
        assert_eq!(store.load(), Some(ThemePreference::Auto));
    }

    #[test]
    fn absent_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferenceStore::at(dir.path().join("theme"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn garbage_content_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("theme");
        fs::write(&path, "sepia\n").expect("write");
        assert_eq!(FilePreferenceStore::at(path).load(), None);
    }

    #[test]
    fn trailing_whitespace_is_tolerated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("theme");
        fs::write(&path, "light\n").expect("write");
        assert_eq!(
            FilePreferenceStore::at(path).load(),
            Some(ThemePreference::Light)
        );
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferenceStore::at(dir.path().join("nested").join("theme"));
        store.save(ThemePreference::Light).expect("save");
        assert_eq!(store.load(), Some(ThemePreference::Light));
    }
}
