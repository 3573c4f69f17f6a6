//! # skill-plotter
//!
//! Façade crate that re-exports the skill group store and, with the default
//! `chart` feature, the bar chart renderer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skill_plotter::chart::{ChartOptions, FileType, layout, save};
//! use skill_plotter::skills::{SkillStore, add_skill, reduce, split_evenly};
//!
//! let store = SkillStore::open("/tmp/skill-plotter")?;
//! add_skill(&store, "skills", "Rust", 8.0, "languages")?;
//! add_skill(&store, "skills", "German", 10.0, "default")?;
//!
//! let columns = split_evenly(&reduce(&store.read("skills")?), 2)?;
//! let scene = layout(&columns, &ChartOptions::default())?;
//! save(&scene, "skills", FileType::Svg)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`skills`]: group files, skill operations, column splitting and prompt loops.
//! - `chart`: layout into a scene and SVG, PNG, JPG or PDF output.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use skill_plotter_skills as skills;

#[cfg(feature = "chart")]
#[cfg_attr(docsrs, doc(cfg(feature = "chart")))]
pub use skill_plotter_chart as chart;
