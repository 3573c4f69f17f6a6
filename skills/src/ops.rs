//! Operations on skill groups built on top of [`SkillStore`].

use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::skill::validate_group;
use crate::store::GROUP_EXTENSION;
use crate::{Levels, SkillEntry, SkillError, SkillGroup, SkillStore};

/// Insert or overwrite a skill in `group` and persist it.
///
/// # Errors
///
/// Returns [`SkillError::InvalidArgument`] for a blank name, or an error if
/// the group cannot be read or written.
pub fn add_skill(
    store: &SkillStore,
    group: &str,
    name: &str,
    level: f64,
    category: &str,
) -> Result<SkillEntry, SkillError> {
    if name.trim().is_empty() {
        return Err(SkillError::InvalidArgument(
            "skill name must not be empty".to_string(),
        ));
    }
    let mut data = store.read(group)?;
    let entry = SkillEntry::new(level, category);
    data.insert(name.to_string(), entry.clone());
    store.write(group, &data)?;
    debug!(group, name, level, category = %entry.category, "added skill");
    Ok(entry)
}

/// Remove a skill from `group`, returning the remaining skills.
///
/// Storage is left untouched if the skill is absent.
///
/// # Errors
///
/// Returns [`SkillError::SkillNotFound`] if `name` is not in the group.
pub fn remove_skill(store: &SkillStore, group: &str, name: &str) -> Result<SkillGroup, SkillError> {
    let mut data = store.read(group)?;
    if data.shift_remove(name).is_none() {
        return Err(SkillError::SkillNotFound {
            name: name.to_string(),
            group: group.to_string(),
        });
    }
    store.write(group, &data)?;
    debug!(group, name, remaining = data.len(), "removed skill");
    Ok(data)
}

/// Order skills for display: default category first, then by category name,
/// then by descending level. Ties keep their original order.
#[must_use]
pub fn sort_by_category(skills: &SkillGroup) -> SkillGroup {
    let mut entries: Vec<(&String, &SkillEntry)> = skills.iter().collect();
    entries.sort_by(|(_, a), (_, b)| {
        (!a.is_default_category())
            .cmp(&!b.is_default_category())
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| b.level.partial_cmp(&a.level).unwrap_or(Ordering::Equal))
    });
    entries
        .into_iter()
        .map(|(name, entry)| (name.clone(), entry.clone()))
        .collect()
}

/// Drop categories, keeping only each skill's level.
#[must_use]
pub fn reduce(skills: &SkillGroup) -> Levels {
    skills
        .iter()
        .map(|(name, entry)| (name.clone(), entry.level))
        .collect()
}

/// How an import was applied to its target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// The target group was replaced by the imported skills.
    Replaced,
    /// The imported skills were merged over the existing ones.
    Merged,
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of skills read from the source file.
    pub imported: usize,
    /// Number of skills in the target group afterwards.
    pub total: usize,
    /// Whether the target was replaced or merged into.
    pub mode: ImportMode,
}

/// Import a skill file into `group`.
///
/// The source must exist, carry the `.json` extension and match the group
/// schema. Nothing is written unless all checks pass. With `overwrite`, or
/// when the target is empty, the target is replaced; otherwise imported
/// skills are merged over existing ones.
///
/// # Errors
///
/// Returns [`SkillError::Validation`] for a missing, misnamed or malformed
/// source file.
pub fn import_skills(
    store: &SkillStore,
    source: &Path,
    group: &str,
    overwrite: bool,
) -> Result<ImportSummary, SkillError> {
    let source_name = source.display().to_string();

    if source.extension().and_then(|ext| ext.to_str()) != Some(GROUP_EXTENSION) {
        return Err(SkillError::validation(
            &source_name,
            format!("file must have the .{GROUP_EXTENSION} extension"),
        ));
    }

    let content = match fs::read_to_string(source) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(SkillError::validation(&source_name, "file does not exist"));
        }
        Err(err) => {
            return Err(SkillError::validation(
                &source_name,
                format!("cannot be read as a text file: {err}"),
            ));
        }
    };

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|err| SkillError::validation(&source_name, format!("not valid JSON: {err}")))?;
    let imported = validate_group(&value, &source_name)?;

    let mut target = store.read(group)?;
    let mode = if overwrite || target.is_empty() {
        target = imported.clone();
        ImportMode::Replaced
    } else {
        target.extend(imported.iter().map(|(k, v)| (k.clone(), v.clone())));
        ImportMode::Merged
    };
    store.write(group, &target)?;

    debug!(group, imported = imported.len(), total = target.len(), ?mode, "imported skills");
    Ok(ImportSummary {
        imported: imported.len(),
        total: target.len(),
        mode,
    })
}

/// Copy the raw group file to `<target_name>.json` inside `dest_dir`.
///
/// # Errors
///
/// Returns [`SkillError::GroupNotFound`] if the group does not exist.
pub fn export_skills(
    store: &SkillStore,
    group: &str,
    target_name: &str,
    dest_dir: &Path,
) -> Result<PathBuf, SkillError> {
    let bytes = store.read_raw(group)?;
    let file_name = if Path::new(target_name)
        .extension()
        .is_some_and(|ext| ext == GROUP_EXTENSION)
    {
        target_name.to_string()
    } else {
        format!("{target_name}.{GROUP_EXTENSION}")
    };
    let target = dest_dir.join(file_name);
    fs::write(&target, bytes).map_err(|source| SkillError::io(&target, source))?;
    debug!(group, target = %target.display(), "exported skill group");
    Ok(target)
}
