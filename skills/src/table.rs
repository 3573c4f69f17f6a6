//! Plain-text table of a group's skills.

use crate::ops::sort_by_category;
use crate::SkillGroup;

const SEPARATOR_WIDTH: usize = 54;

/// Render skills as table lines, sorted by category.
#[must_use]
pub fn skill_table(skills: &SkillGroup) -> Vec<String> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![
        separator.clone(),
        row("Skill", "Level", "Category"),
        separator.clone(),
    ];
    for (name, entry) in &sort_by_category(skills) {
        lines.push(row(name, &entry.level.to_string(), &entry.category));
    }
    lines.push(separator);
    lines
}

fn row(skill: &str, level: &str, category: &str) -> String {
    format!("|{skill:^20}|{level:^10}|{category:^20}|")
}
