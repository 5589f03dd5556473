//! Unfinished task extraction
//!
//! A task section starts at the first line beginning with the configured
//! marker and ends at the next empty line. Only `- [ ]` items, either at the
//! top level or nested by a single tab, are carried over. Lines are split on
//! `\n` only, so a `\r` stays part of its line.
//!
//! A marker appearing again after the section has closed opens it again, so
//! tasks under a second "## Tasks" heading are collected too.

use super::types::{Located, SectionConfig, TaskLine};
use crate::consts::{NOTHING_FOUND, TASKS_HEADING};

const OPEN_TASK: &str = "- [ ]";
const NESTED_OPEN_TASK: &str = "\t- [ ]";

fn is_open_task(line: &str) -> bool {
    line.starts_with(OPEN_TASK) || line.starts_with(NESTED_OPEN_TASK)
}

/// Collect unfinished task lines from the configured section of `text`
pub(crate) fn extract(text: &str, config: &SectionConfig) -> Vec<TaskLine> {
    let marker = config.marker();
    let mut in_section = false;
    let mut tasks = Vec::new();

    for line in text.split('\n') {
        if line.starts_with(&marker) {
            in_section = true;
        } else if in_section && is_open_task(line) {
            tasks.push(TaskLine::new(line));
        } else if in_section && line.is_empty() {
            in_section = false;
        }
    }

    tasks
}

/// Text appended to the new daily note.
///
/// Carried tasks always go under a fixed "## Tasks" heading. The placeholder
/// goes under the configured marker instead. Every block, placeholder
/// included, ends in a newline.
pub(crate) fn render_block(config: &SectionConfig, previous: &Located<'_>, tasks: &[TaskLine]) -> String {
    if matches!(previous, Located::NotFound) || tasks.is_empty() {
        return format!("{}\n{NOTHING_FOUND}\n", config.marker());
    }

    let mut block = String::from(TASKS_HEADING);
    block.push('\n');
    for task in tasks {
        block.push_str(&task.to_line());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DatedNote;
    use std::path::PathBuf;

    fn lines(tasks: &[TaskLine]) -> Vec<String> {
        tasks.iter().map(TaskLine::to_line).collect()
    }

    fn strs(tasks: &[TaskLine]) -> Vec<&str> {
        tasks.iter().map(TaskLine::as_str).collect()
    }

    #[test]
    fn keeps_open_and_nested_tasks_in_order() {
        let text = "## Tasks\n- [ ] x\n\t- [ ] y\n- [x] z\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(lines(&tasks), vec!["- [ ] x\n", "\t- [ ] y\n"]);
    }

    #[test]
    fn blank_line_ends_section() {
        let text = "## Tasks\n- [ ] a\n- [ ] b\n\n- [ ] c\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] a", "- [ ] b"]);
    }

    #[test]
    fn missing_marker_yields_nothing() {
        let text = "# Journal\n- [ ] not in a section\n## Notes\n- [ ] also not\n";
        assert!(extract(text, &SectionConfig::default()).is_empty());
        assert!(extract("", &SectionConfig::default()).is_empty());
    }

    #[test]
    fn completed_items_dropped_order_kept() {
        let text = "## Tasks\n- [ ] one\n- [x] done\n- [ ] two\n- [X] also done\n- [ ] three\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] one", "- [ ] two", "- [ ] three"]);
    }

    #[test]
    fn plain_lines_skipped_without_closing() {
        let text = "## Tasks\nsome remark\n- [ ] kept\n### sub heading\n- [ ] also kept\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] kept", "- [ ] also kept"]);
    }

    #[test]
    fn whitespace_only_line_does_not_close() {
        let text = "## Tasks\n- [ ] a\n \n- [ ] b\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] a", "- [ ] b"]);
    }

    #[test]
    fn only_single_tab_nesting_captured() {
        let text = "## Tasks\n- [ ] top\n\t\t- [ ] deep\n    - [ ] spaces\n\t- [ ] one tab\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] top", "\t- [ ] one tab"]);
    }

    #[test]
    fn tasks_before_marker_ignored() {
        let text = "- [ ] early\n## Tasks\n- [ ] late\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] late"]);
    }

    #[test]
    fn marker_is_a_prefix_match() {
        let text = "## Tasks for Monday\n- [ ] a\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] a"]);
    }

    #[test]
    fn uses_configured_marker() {
        let text = "## Tasks\n- [ ] wrong\n\n### Todo\n- [ ] right\n";
        let tasks = extract(text, &SectionConfig::new("Todo", "###"));
        assert_eq!(strs(&tasks), vec!["- [ ] right"]);
    }

    #[test]
    fn second_marker_reopens_closed_section() {
        let text = "## Tasks\n- [ ] a\n\nunrelated\n- [ ] skipped\n## Tasks\n- [ ] b\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] a", "- [ ] b"]);
    }

    #[test]
    fn crlf_text_passes_through_untouched() {
        // A "\r" line is not empty, so it does not close the section
        let text = "## Tasks\r\n- [ ] a\r\n\r\n- [ ] b\r\n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] a\r", "- [ ] b\r"]);
    }

    #[test]
    fn task_text_kept_verbatim() {
        let text = "## Tasks\n- [ ] call Bob #work [[2024-03-08]]  \n";
        let tasks = extract(text, &SectionConfig::default());
        assert_eq!(strs(&tasks), vec!["- [ ] call Bob #work [[2024-03-08]]  "]);
    }

    #[test]
    fn extraction_is_repeatable() {
        let text = "## Tasks\n- [ ] a\n\t- [ ] b\n\n## Tasks\n- [ ] c\n";
        let config = SectionConfig::default();
        assert_eq!(extract(text, &config), extract(text, &config));
    }

    #[test]
    fn block_lists_tasks_under_marker() {
        let note = DatedNote {
            id: "2024-03-08".to_string(),
            path: PathBuf::from("2024-03-08.md"),
        };
        let tasks = vec![TaskLine::new("- [ ] x"), TaskLine::new("\t- [ ] y")];
        let block = render_block(&SectionConfig::default(), &Located::Found(&note), &tasks);
        assert_eq!(block, "## Tasks\n- [ ] x\n\t- [ ] y\n");
    }

    #[test]
    fn block_heading_ignores_configured_section() {
        let note = DatedNote {
            id: "2024-03-08".to_string(),
            path: PathBuf::from("2024-03-08.md"),
        };
        let tasks = vec![TaskLine::new("- [ ] right")];
        let block = render_block(&SectionConfig::new("Todo", "###"), &Located::Found(&note), &tasks);
        assert_eq!(block, "## Tasks\n- [ ] right\n");
    }

    #[test]
    fn block_placeholder_when_not_found() {
        let block = render_block(&SectionConfig::new("Todo", "###"), &Located::NotFound, &[]);
        assert_eq!(
            block,
            "### Todo\nNo unfinished business found in previous notes\n"
        );
    }

    #[test]
    fn block_placeholder_when_found_but_empty() {
        let note = DatedNote {
            id: "2024-03-08".to_string(),
            path: PathBuf::from("2024-03-08.md"),
        };
        let block = render_block(&SectionConfig::default(), &Located::Found(&note), &[]);
        assert_eq!(block, "## Tasks\nNo unfinished business found in previous notes\n");
    }
}
