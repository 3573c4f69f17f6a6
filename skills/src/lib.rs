//! Skill groups for skill-plotter.
//!
//! A skill group is a named set of self-rated skills kept as one JSON file in
//! the application data directory.
//!
//! # Structure
//!
//! ```text
//! ~/.config/skill-plotter/
//! ├── skills.json        # default group
//! └── languages.json
//! ```
//!
//! # File Format
//!
//! ```json
//! {
//!   "Python": { "level": 8.5, "category": "languages" },
//!   "German": { "level": 10, "category": "default" }
//! }
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use skill_plotter_skills::{SkillStore, add_skill, reduce, sort_by_category, split_evenly};
//!
//! let store = SkillStore::open("/tmp/skill-plotter")?;
//! add_skill(&store, "skills", "Rust", 8.0, "languages")?;
//!
//! let skills = sort_by_category(&store.read("skills")?);
//! let columns = split_evenly(&reduce(&skills), 1)?;
//! assert_eq!(columns.len(), 1);
//! # Ok::<(), skill_plotter_skills::SkillError>(())
//! ```

mod error;
mod interactive;
mod ops;
mod skill;
mod split;
mod store;
mod table;

pub use error::{Result, SkillError};
pub use interactive::{Console, Tone, interactive_add, interactive_remove};
pub use ops::{
    ImportMode, ImportSummary, add_skill, export_skills, import_skills, reduce, remove_skill,
    sort_by_category,
};
pub use skill::{
    DEFAULT_CATEGORY, DEFAULT_GROUP, Levels, MAX_LEVEL, SkillEntry, SkillGroup, check_level,
    group_schema, parse_level, validate_group,
};
pub use split::{PLACEHOLDER, split_evenly};
pub use store::{GROUP_EXTENSION, SkillStore};
pub use table::skill_table;
