//! Prompt loops for adding and removing skills one at a time.
//!
//! Both loops run until the user cancels. Every iteration is a complete
//! read-modify-write of the group file, so stopping between prompts never
//! leaves a half-written skill behind.

use std::io;

use crate::ops::{add_skill, remove_skill, sort_by_category};
use crate::skill::{DEFAULT_CATEGORY, MAX_LEVEL};
use crate::table::skill_table;
use crate::{SkillError, SkillStore};

/// Kind of message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Uncolored output such as table rows.
    Plain,
    /// Informational notice.
    Info,
    /// A change was applied.
    Success,
    /// A request could not be fulfilled.
    Failure,
}

/// Terminal seam used by the interactive loops.
pub trait Console {
    /// Show `prompt` and read one line of input.
    ///
    /// Returns `Ok(None)` when the user cancels (Esc, Ctrl+C or end of input).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show a message to the user.
    fn say(&mut self, tone: Tone, message: &str);
}

fn ask(console: &mut impl Console, prompt: &str) -> Result<Option<String>, SkillError> {
    console.read_line(prompt).map_err(SkillError::Prompt)
}

/// Repeatedly prompt for skills and add each one to `group`.
///
/// Levels must lie in `(0, 10]`; anything else is asked again. The category
/// is asked for each skill unless `fixed_category` is given.
/// Returns the number of skills added before the user cancelled.
///
/// # Errors
///
/// Returns an error if the terminal or the group file fails.
pub fn interactive_add(
    store: &SkillStore,
    console: &mut impl Console,
    group: &str,
    fixed_category: Option<&str>,
) -> Result<usize, SkillError> {
    console.say(
        Tone::Info,
        &format!("Using interactive mode, press Esc or Ctrl+C to exit, skills will be added to {group}"),
    );
    if let Some(category) = fixed_category {
        console.say(Tone::Info, &format!("Using category {category}"));
    }

    let mut added = 0;
    loop {
        let Some(name) = ask(console, "Enter skill name: ")? else {
            break;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let Some(level) = ask_level(console)? else {
            break;
        };

        let category = if let Some(category) = fixed_category {
            category.to_string()
        } else {
            let Some(category) = ask(console, &format!("Enter category [{DEFAULT_CATEGORY}]: "))?
            else {
                break;
            };
            category.trim().to_string()
        };

        add_skill(store, group, name, level, &category)?;
        console.say(Tone::Success, &format!("Added skill {name} with level {level}"));
        added += 1;
    }

    Ok(added)
}

fn ask_level(console: &mut impl Console) -> Result<Option<f64>, SkillError> {
    loop {
        let Some(input) = ask(console, &format!("Enter level [0-{MAX_LEVEL}]: "))? else {
            return Ok(None);
        };
        match input.trim().parse::<f64>() {
            Ok(level) if level > 0.0 && level <= MAX_LEVEL => return Ok(Some(level)),
            _ => console.say(Tone::Failure, "Level must be between 0 and 10 and not 0"),
        }
    }
}

/// Show the skills of `group`, then repeatedly prompt for one to remove.
///
/// Only skills still in the group are accepted. The loop ends when the user
/// cancels or no skills are left. Returns the number of skills removed.
///
/// # Errors
///
/// Returns an error if the terminal or the group file fails.
pub fn interactive_remove(
    store: &SkillStore,
    console: &mut impl Console,
    group: &str,
) -> Result<usize, SkillError> {
    console.say(
        Tone::Info,
        &format!("Using interactive mode, press Esc or Ctrl+C to exit, skills will be removed from {group}"),
    );

    let data = store.read(group)?;
    if data.is_empty() {
        console.say(
            Tone::Failure,
            &format!("No skills found in group {group}, it probably does not exist!"),
        );
        return Ok(0);
    }

    console.say(Tone::Info, &format!("Skills of group {group}:"));
    for line in skill_table(&data) {
        console.say(Tone::Plain, &line);
    }

    let mut available: Vec<String> = sort_by_category(&data).into_keys().collect();
    let mut removed = 0;
    while !available.is_empty() {
        let Some(name) = ask(console, "Enter skill name: ")? else {
            break;
        };
        let name = name.trim();
        let Some(position) = available.iter().position(|skill| skill == name) else {
            console.say(
                Tone::Failure,
                &format!("'{name}' is not one of: {}", available.join(", ")),
            );
            continue;
        };

        match remove_skill(store, group, name) {
            Ok(_) => {
                console.say(Tone::Success, &format!("Removed skill {name}"));
                removed += 1;
            }
            Err(SkillError::SkillNotFound { .. }) => {
                console.say(Tone::Failure, &format!("Skill {name} not found"));
            }
            Err(err) => return Err(err),
        }
        available.remove(position);
    }

    if available.is_empty() {
        console.say(Tone::Info, &format!("No skills left in group {group}"));
    }
    Ok(removed)
}
