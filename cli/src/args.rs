//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use skill_plotter_chart::{ChartOptions, Color, FileType, Style};
use skill_plotter_skills::{DEFAULT_GROUP, parse_level};

/// Plot self-rated skills as a bar chart.
///
/// Without a subcommand the skills of a group are plotted to a file. The
/// subcommands manage skills and groups; each group is handled separately.
#[derive(Parser, Debug)]
#[command(name = "skill-plotter", about, disable_version_flag = true)]
pub struct Cli {
    /// Skill group to work on.
    #[arg(short = 'g', long, global = true, default_value = DEFAULT_GROUP)]
    pub skill_group: String,

    /// Directory holding the group files.
    #[arg(long, global = true, env = "SKILL_PLOTTER_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Print version information and exit.
    #[arg(short = 'V', long)]
    pub version: bool,

    #[command(flatten)]
    pub plot: PlotArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options of the default plot command.
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// File type of the output file.
    #[arg(short = 't', long, default_value = "svg")]
    pub file_type: FileType,

    /// Name of the output file, without extension.
    #[arg(short = 'n', long, default_value = "skills")]
    pub file_name: String,

    /// Number of columns to split the skills into.
    #[arg(long, default_value_t = 2)]
    pub columns: usize,

    /// Order skills by category before plotting.
    #[arg(long)]
    pub categories: bool,

    /// Height of the skill bar as a fraction of the row.
    #[arg(long, default_value_t = 0.6)]
    pub bar_height: f64,

    /// Height of the bar background as a fraction of the row.
    #[arg(long, default_value_t = 0.7)]
    pub bg_height: f64,

    /// Color of the skill bar.
    #[arg(long, default_value = "#367DA2")]
    pub bar_color: Color,

    /// Color of the bar background.
    #[arg(long, default_value = "#404040")]
    pub bg_color: Color,

    /// Color of the skill names.
    #[arg(long, default_value = "#404040")]
    pub font_color: Color,

    /// Canvas color; transparent when omitted (white for jpg).
    #[arg(long)]
    pub canvas_color: Option<Color>,

    /// Visual style, may be repeated: outline, round or sketch.
    #[arg(long = "style", value_name = "STYLE")]
    pub styles: Vec<Style>,
}

impl PlotArgs {
    /// Chart appearance described by these arguments.
    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        self.styles.iter().fold(
            ChartOptions {
                bar_height: self.bar_height,
                background_height: self.bg_height,
                bar_color: self.bar_color,
                background_color: self.bg_color,
                font_color: self.font_color,
                canvas_color: self.canvas_color,
                styles: Vec::new(),
            },
            |options, style| options.with_style(*style),
        )
    }
}

/// Skill and group management commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a skill, overwriting the level of an existing one.
    Add {
        /// Name of the skill.
        skill: String,
        /// Level between 0 and 10.
        #[arg(value_parser = parse_level, allow_negative_numbers = true)]
        level: f64,
        /// Category used to group skills.
        #[arg(short, long, default_value = "default")]
        category: String,
    },
    /// Remove a skill.
    Remove {
        /// Name of the skill.
        skill: String,
    },
    /// Add skills one after another until cancelled.
    InteractiveAdd {
        /// Use this category for every skill instead of asking.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove skills one after another until cancelled.
    InteractiveRemove,
    /// Show all existing groups.
    ListGroups,
    /// Show the skills of a group.
    ListSkills,
    /// Delete a group.
    DeleteGroup {
        /// Name of the group to delete.
        group: String,
    },
    /// Import a skill file into a group.
    Import {
        /// JSON file to import.
        file: PathBuf,
        /// Replace the group instead of merging into it.
        #[arg(long)]
        overwrite: bool,
    },
    /// Export a group to a JSON file in the current directory.
    Export {
        /// Name of the exported file.
        name: String,
    },
    /// Print the JSON Schema of a group file.
    Schema,
}
