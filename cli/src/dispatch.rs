//! Maps parsed command lines onto skill operations and the chart renderer.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use skill_plotter_chart::{ChartError, layout, save};
use skill_plotter_skills::{
    Console, DEFAULT_GROUP, ImportMode, SkillError, SkillStore, Tone, add_skill, export_skills,
    group_schema, import_skills, interactive_add, interactive_remove, reduce, remove_skill,
    skill_table, sort_by_category, split_evenly,
};
use tracing::debug;

use crate::args::{Cli, Command, PlotArgs};

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Done,
    /// The request was rejected and the user was told why.
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => Self::SUCCESS,
            Outcome::Failed => Self::FAILURE,
        }
    }
}

/// Text printed by `--version`.
#[must_use]
pub fn version_text() -> String {
    format!(
        "skill-plotter, version {}\nFor further usage, type: skill-plotter --help",
        env!("CARGO_PKG_VERSION")
    )
}

/// Run one command against `store`.
///
/// Files written by `export` and the plot command land in `cwd`. Mistakes
/// such as unknown skills or invalid files are reported on `console` and
/// give [`Outcome::Failed`].
///
/// # Errors
///
/// Returns an error for failures outside the user's control, such as
/// unreadable group files or a broken terminal.
pub fn run(cli: &Cli, store: &SkillStore, console: &mut impl Console, cwd: &Path) -> Result<Outcome> {
    let group = cli.skill_group.as_str();
    let Some(command) = &cli.command else {
        return plot(&cli.plot, store, console, group, cwd);
    };
    debug!(?command, group, "running command");

    match command {
        Command::Add {
            skill,
            level,
            category,
        } => match add_skill(store, group, skill, *level, category) {
            Ok(_) => {
                console.say(Tone::Success, &format!("Added skill {skill} with level {level}"));
                Ok(Outcome::Done)
            }
            Err(err) => report(store, console, err),
        },
        Command::Remove { skill } => match remove_skill(store, group, skill) {
            Ok(_) => {
                console.say(Tone::Success, &format!("Removed skill {skill}"));
                Ok(Outcome::Done)
            }
            Err(SkillError::SkillNotFound { .. }) => {
                console.say(Tone::Failure, &format!("Skill {skill} not found"));
                Ok(Outcome::Failed)
            }
            Err(err) => report(store, console, err),
        },
        Command::InteractiveAdd { category } => {
            match interactive_add(store, console, group, category.as_deref()) {
                Ok(added) => {
                    console.say(Tone::Info, &format!("Added {added} skill(s) to {group}"));
                    Ok(Outcome::Done)
                }
                Err(err) => report(store, console, err),
            }
        }
        Command::InteractiveRemove => match interactive_remove(store, console, group) {
            Ok(0) if store.read(group)?.is_empty() => {
                list_groups(store, console)?;
                Ok(Outcome::Failed)
            }
            Ok(removed) => {
                console.say(Tone::Info, &format!("Removed {removed} skill(s) from {group}"));
                Ok(Outcome::Done)
            }
            Err(err) => report(store, console, err),
        },
        Command::ListGroups => {
            list_groups(store, console)?;
            Ok(Outcome::Done)
        }
        Command::ListSkills => list_skills(store, console, group),
        Command::DeleteGroup { group } => match store.delete(group) {
            Ok(()) => {
                console.say(Tone::Success, &format!("Deleted group {group}"));
                Ok(Outcome::Done)
            }
            Err(SkillError::GroupNotFound { .. }) => {
                console.say(Tone::Failure, &format!("Group {group} not found"));
                list_groups(store, console)?;
                Ok(Outcome::Failed)
            }
            Err(err) => report(store, console, err),
        },
        Command::Import { file, overwrite } => match import_skills(store, file, group, *overwrite)
        {
            Ok(summary) => {
                let how = match summary.mode {
                    ImportMode::Replaced => "replaced",
                    ImportMode::Merged => "merged into",
                };
                console.say(
                    Tone::Success,
                    &format!(
                        "Imported {} skill(s), {how} group {group} ({} total)",
                        summary.imported, summary.total
                    ),
                );
                Ok(Outcome::Done)
            }
            Err(err) => report(store, console, err),
        },
        Command::Export { name } => match export_skills(store, group, name, cwd) {
            Ok(path) => {
                console.say(
                    Tone::Success,
                    &format!("Exported group {group} to {}", path.display()),
                );
                Ok(Outcome::Done)
            }
            Err(err) => report(store, console, err),
        },
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&group_schema())
                .context("failed to serialize the group schema")?;
            console.say(Tone::Plain, &schema);
            Ok(Outcome::Done)
        }
    }
}

fn plot(
    args: &PlotArgs,
    store: &SkillStore,
    console: &mut impl Console,
    group: &str,
    cwd: &Path,
) -> Result<Outcome> {
    console.say(Tone::Info, &format!("Using <{group}> skill group"));
    let data = match store.read(group) {
        Ok(data) => data,
        Err(err) => return report(store, console, err),
    };
    if data.is_empty() {
        return no_skills(store, console, group);
    }

    let skills = if args.categories {
        sort_by_category(&data)
    } else {
        data
    };
    let columns = args.columns.min(skills.len());
    let chunks = match split_evenly(&reduce(&skills), columns) {
        Ok(chunks) => chunks,
        Err(err) => return report(store, console, err),
    };

    let scene = match layout(&chunks, &args.chart_options()) {
        Ok(scene) => scene,
        Err(err @ (ChartError::InvalidOption(_) | ChartError::Empty)) => {
            console.say(Tone::Failure, &err.to_string());
            return Ok(Outcome::Failed);
        }
        Err(err) => return Err(err).context("failed to lay out the chart"),
    };

    let stem = cwd.join(&args.file_name);
    console.say(
        Tone::Info,
        &format!("Plotting skills to {}.{}", args.file_name, args.file_type),
    );
    let path = save(&scene, &stem.to_string_lossy(), args.file_type)
        .with_context(|| format!("failed to plot group {group}"))?;
    console.say(Tone::Success, &format!("Saved chart to {}", path.display()));
    Ok(Outcome::Done)
}

fn list_skills(store: &SkillStore, console: &mut impl Console, group: &str) -> Result<Outcome> {
    let data = match store.read(group) {
        Ok(data) => data,
        Err(err) => return report(store, console, err),
    };
    if data.is_empty() {
        return no_skills(store, console, group);
    }

    console.say(Tone::Info, &format!("Skills of group {group}:"));
    for line in skill_table(&data) {
        console.say(Tone::Plain, &line);
    }
    Ok(Outcome::Done)
}

fn no_skills(store: &SkillStore, console: &mut impl Console, group: &str) -> Result<Outcome> {
    console.say(
        Tone::Failure,
        &format!("No skills found in group {group}, it probably does not exist!"),
    );
    list_groups(store, console)?;
    Ok(Outcome::Failed)
}

fn list_groups(store: &SkillStore, console: &mut impl Console) -> Result<()> {
    let groups = store.list_groups().context("failed to list skill groups")?;
    console.say(Tone::Info, "Existing groups:");
    for group in groups {
        let suffix = if group == DEFAULT_GROUP { " (default)" } else { "" };
        console.say(Tone::Plain, &format!("- {group}{suffix}"));
    }
    Ok(())
}

/// Tell the user about a rejected request, or pass environment failures on.
fn report(store: &SkillStore, console: &mut impl Console, err: SkillError) -> Result<Outcome> {
    if !err.is_user_error() {
        return Err(err.into());
    }
    console.say(Tone::Failure, &err.to_string());
    if matches!(err, SkillError::GroupNotFound { .. }) {
        list_groups(store, console)?;
    }
    Ok(Outcome::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use skill_plotter_skills::SkillEntry;
    use std::collections::VecDeque;
    use std::fs;
    use std::io;
    use tempfile::{TempDir, tempdir};

    #[derive(Debug, Default)]
    struct RecordingConsole {
        input: VecDeque<String>,
        output: Vec<(Tone, String)>,
    }

    impl RecordingConsole {
        fn with_input(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|line| (*line).to_string()).collect(),
                ..Self::default()
            }
        }

        fn said(&self, tone: Tone) -> Vec<&str> {
            self.output
                .iter()
                .filter(|(t, _)| *t == tone)
                .map(|(_, message)| message.as_str())
                .collect()
        }
    }

    impl Console for RecordingConsole {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.input.pop_front())
        }

        fn say(&mut self, tone: Tone, message: &str) {
            self.output.push((tone, message.to_string()));
        }
    }

    struct Fixture {
        dir: TempDir,
        store: SkillStore,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempdir().expect("create temp dir");
            let store = SkillStore::open(dir.path().join("data")).expect("open store");
            Self { dir, store }
        }

        fn run(&self, args: &[&str], console: &mut RecordingConsole) -> Outcome {
            let cli = Cli::try_parse_from(std::iter::once("skill-plotter").chain(args.iter().copied()))
                .expect("valid arguments");
            run(&cli, &self.store, console, self.dir.path()).expect("command runs")
        }

        fn exec(&self, args: &[&str]) -> (Outcome, RecordingConsole) {
            let mut console = RecordingConsole::default();
            let outcome = self.run(args, &mut console);
            (outcome, console)
        }
    }

    #[test]
    fn test_add_and_list_skills() {
        let fixture = Fixture::new();
        let (outcome, console) = fixture.exec(&["add", "Rust", "8", "-c", "languages"]);
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(console.said(Tone::Success), vec!["Added skill Rust with level 8"]);

        let (outcome, console) = fixture.exec(&["list-skills"]);
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(console.said(Tone::Info), vec!["Skills of group skills:"]);
        assert!(console.said(Tone::Plain).iter().any(|line| line.contains("Rust")));
    }

    #[test]
    fn test_add_blank_name_fails_and_plot_still_works() {
        let fixture = Fixture::new();
        let (outcome, console) = fixture.exec(&["add", "", "5"]);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(console.said(Tone::Failure).len(), 1);

        for (name, level) in [("Rust", "8"), ("Go", "5"), ("C", "3")] {
            fixture.exec(&["add", name, level]);
        }
        let (outcome, _) = fixture.exec(&["--columns", "2"]);
        assert_eq!(outcome, Outcome::Done);
    }

    #[test]
    fn test_remove_missing_skill_fails() {
        let fixture = Fixture::new();
        fixture.exec(&["add", "Go", "4"]);

        let (outcome, console) = fixture.exec(&["remove", "Rust"]);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(console.said(Tone::Failure), vec!["Skill Rust not found"]);

        let (outcome, _) = fixture.exec(&["remove", "Go"]);
        assert_eq!(outcome, Outcome::Done);
        assert!(fixture.store.read("skills").unwrap().is_empty());
    }

    #[test]
    fn test_list_groups_marks_default() {
        let fixture = Fixture::new();
        fixture.exec(&["add", "Go", "4"]);
        fixture.exec(&["add", "Chess", "6", "-g", "hobbies"]);

        let (_, console) = fixture.exec(&["list-groups"]);
        assert_eq!(console.said(Tone::Plain), vec!["- hobbies", "- skills (default)"]);
    }

    #[test]
    fn test_delete_missing_group_lists_groups() {
        let fixture = Fixture::new();
        fixture.exec(&["add", "Go", "4"]);

        let (outcome, console) = fixture.exec(&["delete-group", "work"]);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(console.said(Tone::Failure), vec!["Group work not found"]);
        assert_eq!(console.said(Tone::Plain), vec!["- skills (default)"]);

        let (outcome, _) = fixture.exec(&["delete-group", "skills"]);
        assert_eq!(outcome, Outcome::Done);
        assert!(!fixture.store.exists("skills").unwrap());
    }

    #[test]
    fn test_plot_writes_chart_into_cwd() {
        let fixture = Fixture::new();
        for (name, level) in [("Rust", "8"), ("Go", "5"), ("C", "3")] {
            fixture.exec(&["add", name, level]);
        }

        let (outcome, console) = fixture.exec(&["-n", "cv", "--columns", "5"]);
        assert_eq!(outcome, Outcome::Done);
        let svg = fs::read_to_string(fixture.dir.path().join("cv.svg")).unwrap();
        assert!(svg.contains("Rust"));
        assert_eq!(console.said(Tone::Success).len(), 1);
    }

    #[test]
    fn test_plot_empty_group_fails() {
        let fixture = Fixture::new();
        let (outcome, console) = fixture.exec(&["-g", "empty"]);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            console.said(Tone::Failure),
            vec!["No skills found in group empty, it probably does not exist!"]
        );
        assert!(!fixture.dir.path().join("skills.svg").exists());
    }

    #[test]
    fn test_plot_rejects_bad_heights() {
        let fixture = Fixture::new();
        fixture.exec(&["add", "Go", "4"]);

        let (outcome, console) = fixture.exec(&["--bar-height", "1.5"]);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(console.said(Tone::Failure).len(), 1);
    }

    #[test]
    fn test_import_and_export() {
        let fixture = Fixture::new();
        let source = fixture.dir.path().join("incoming.json");
        fs::write(&source, r#"{"Rust": {"level": 9, "category": "languages"}}"#).unwrap();

        let (outcome, _) = fixture.exec(&["import", source.to_str().unwrap(), "-g", "work"]);
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            fixture.store.read("work").unwrap()["Rust"],
            SkillEntry::new(9.0, "languages")
        );

        let (outcome, _) = fixture.exec(&["export", "backup", "-g", "work"]);
        assert_eq!(outcome, Outcome::Done);
        assert!(fixture.dir.path().join("backup.json").exists());
    }

    #[test]
    fn test_invalid_import_and_missing_export_fail() {
        let fixture = Fixture::new();
        let source = fixture.dir.path().join("broken.json");
        fs::write(&source, r#"{"Rust": {"level": 12, "category": "x"}}"#).unwrap();

        let (outcome, _) = fixture.exec(&["import", source.to_str().unwrap()]);
        assert_eq!(outcome, Outcome::Failed);
        assert!(!fixture.store.exists("skills").unwrap());

        let (outcome, console) = fixture.exec(&["export", "backup", "-g", "nothing"]);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(console.said(Tone::Failure).len(), 1);
    }

    #[test]
    fn test_interactive_add_until_input_ends() {
        let fixture = Fixture::new();
        let mut console = RecordingConsole::with_input(&["Rust", "11", "9", "", "Go", "4"]);

        let outcome = fixture.run(&["interactive-add", "-c", "languages"], &mut console);
        assert_eq!(outcome, Outcome::Done);

        let data = fixture.store.read("skills").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data["Go"], SkillEntry::new(4.0, "languages"));
    }

    #[test]
    fn test_interactive_remove() {
        let fixture = Fixture::new();
        fixture.exec(&["add", "Go", "4"]);
        fixture.exec(&["add", "Rust", "8"]);

        let mut console = RecordingConsole::with_input(&["Nope", "Go"]);
        let outcome = fixture.run(&["interactive-remove"], &mut console);
        assert_eq!(outcome, Outcome::Done);
        assert!(console.said(Tone::Success).contains(&"Removed skill Go"));
        assert_eq!(fixture.store.read("skills").unwrap().len(), 1);

        let mut console = RecordingConsole::default();
        let outcome = fixture.run(&["interactive-remove", "-g", "empty"], &mut console);
        assert_eq!(outcome, Outcome::Failed);
    }

    #[test]
    fn test_schema_is_json() {
        let fixture = Fixture::new();
        let (_, console) = fixture.exec(&["schema"]);
        let schema: serde_json::Value = serde_json::from_str(console.said(Tone::Plain)[0]).unwrap();
        assert!(schema.is_object());
    }
}
