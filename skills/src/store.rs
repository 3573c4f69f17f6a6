//! File-backed storage of skill groups.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::skill::StoredEntry;
use crate::{SkillError, SkillGroup};

/// Extension of group files inside the data directory.
pub const GROUP_EXTENSION: &str = "json";

/// Stores each skill group as `<group>.json` inside one data directory.
///
/// The directory is an explicit value resolved by the caller, so tests and
/// alternative installs never touch the user's real data.
///
/// # Example
///
/// ```rust,no_run
/// use skill_plotter_skills::{SkillEntry, SkillStore};
///
/// let store = SkillStore::open("/tmp/skill-plotter")?;
/// let mut group = store.read("skills")?;
/// group.insert("Rust".into(), SkillEntry::uncategorized(8.0));
/// store.write("skills", &group)?;
/// # Ok::<(), skill_plotter_skills::SkillError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SkillStore {
    root: PathBuf,
}

impl SkillStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SkillError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| SkillError::io(&root, source))?;
        debug!(root = %root.display(), "opened skill store");
        Ok(Self { root })
    }

    /// Directory holding the group files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `group`.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::InvalidArgument`] if the group name could escape
    /// the data directory.
    pub fn group_path(&self, group: &str) -> Result<PathBuf, SkillError> {
        check_group_name(group)?;
        Ok(self.root.join(format!("{group}.{GROUP_EXTENSION}")))
    }

    /// Check whether a group file exists.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid group names or unreadable metadata.
    pub fn exists(&self, group: &str) -> Result<bool, SkillError> {
        path_exists(&self.group_path(group)?)
    }

    /// Read a group, returning an empty mapping if it does not exist or is blank.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Parse`] if the file is not a valid skill mapping.
    pub fn read(&self, group: &str) -> Result<SkillGroup, SkillError> {
        let path = self.group_path(group)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(group, "group file missing, treating as empty");
                return Ok(SkillGroup::new());
            }
            Err(source) => return Err(SkillError::io(path, source)),
        };

        if content.trim().is_empty() {
            return Ok(SkillGroup::new());
        }

        let stored: IndexMap<String, StoredEntry> = serde_json::from_str(&content)
            .map_err(|source| SkillError::Parse {
                path: path.clone(),
                source,
            })?;

        let legacy = stored
            .values()
            .filter(|entry| matches!(entry, StoredEntry::Level(_)))
            .count();
        if legacy > 0 {
            warn!(group, legacy, "group holds bare levels, using default category");
        }

        let group_data: SkillGroup = stored
            .into_iter()
            .map(|(name, entry)| (name, entry.into()))
            .collect();
        debug!(group, skills = group_data.len(), "read skill group");
        Ok(group_data)
    }

    /// Read the group file bytes unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::GroupNotFound`] if the group does not exist.
    pub fn read_raw(&self, group: &str) -> Result<Vec<u8>, SkillError> {
        let path = self.group_path(group)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(SkillError::GroupNotFound {
                group: group.to_string(),
            }),
            Err(source) => Err(SkillError::io(path, source)),
        }
    }

    /// Overwrite a group file with `data`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be encoded or the file cannot be written.
    pub fn write(&self, group: &str, data: &SkillGroup) -> Result<(), SkillError> {
        let path = self.group_path(group)?;
        let encoded = serde_json::to_vec_pretty(data).map_err(|source| SkillError::Encode {
            group: group.to_string(),
            source,
        })?;
        fs::write(&path, encoded).map_err(|source| SkillError::io(&path, source))?;
        debug!(group, skills = data.len(), "wrote skill group");
        Ok(())
    }

    /// Delete a group file.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::GroupNotFound`] if the group does not exist.
    pub fn delete(&self, group: &str) -> Result<(), SkillError> {
        let path = self.group_path(group)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(group, "deleted skill group");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(SkillError::GroupNotFound {
                group: group.to_string(),
            }),
            Err(source) => Err(SkillError::io(path, source)),
        }
    }

    /// Names of all groups in the data directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn list_groups(&self) -> Result<Vec<String>, SkillError> {
        let entries = fs::read_dir(&self.root).map_err(|source| SkillError::io(&self.root, source))?;

        let mut groups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SkillError::io(&self.root, source))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(GROUP_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                groups.push(stem.to_string());
            }
        }

        groups.sort();
        Ok(groups)
    }
}

fn check_group_name(group: &str) -> Result<(), SkillError> {
    let invalid = group.trim().is_empty()
        || group.starts_with('.')
        || group.contains(['/', '\\'])
        || group.contains('\0');
    if invalid {
        return Err(SkillError::InvalidArgument(format!(
            "'{group}' is not a valid group name"
        )));
    }
    Ok(())
}

fn path_exists(path: &Path) -> Result<bool, SkillError> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(SkillError::io(path, err)),
    }
}
