//! Changelog rendering: commit records grouped by canonical type under the
//! fixed section-title table, breaking changes listed first.

use crate::domain::{CommitRecord, SECTION_ORDER};

/// Heading used when no release version is supplied
pub const UNRELEASED: &str = "Unreleased";

/// Parse raw commit messages into records for changelog grouping.
///
/// Lines that are not well-formed conventional commits (including `wip:`
/// noise) are skipped.
pub fn collect_records(messages: &[String]) -> Vec<CommitRecord> {
    messages
        .iter()
        .filter_map(|message| CommitRecord::parse(message))
        .collect()
}

/// Render a markdown changelog section for one release.
pub fn render(version: &str, records: &[CommitRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {}\n", version));

    let breaking: Vec<&CommitRecord> = records.iter().filter(|r| r.breaking).collect();
    if !breaking.is_empty() {
        out.push_str("\n### BREAKING CHANGES\n\n");
        for record in breaking {
            out.push_str(&entry(record));
        }
    }

    for section_type in SECTION_ORDER {
        let entries: Vec<&CommitRecord> = records
            .iter()
            .filter(|r| r.commit_type == section_type)
            .collect();
        if entries.is_empty() {
            continue;
        }

        out.push_str(&format!("\n### {}\n\n", section_type.section_title()));
        for record in entries {
            out.push_str(&entry(record));
        }
    }

    out
}

fn entry(record: &CommitRecord) -> String {
    match &record.scope {
        Some(scope) => format!("- **{}:** {}\n", scope, record.subject),
        None => format!("- {}\n", record.subject),
    }
}
