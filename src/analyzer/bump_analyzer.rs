use crate::domain::{CommitRecord, VersionBump};

/// Determine the version bump for a set of commit records.
///
/// Each record contributes its own bump and the set reduces with `max` over
/// the precedence order major > minor > patch > none, so the decision is
/// independent of commit ordering. An empty set yields `None`: the release
/// job must skip publishing rather than error.
pub fn analyze_records(records: &[CommitRecord]) -> VersionBump {
    records
        .iter()
        .map(CommitRecord::bump)
        .max()
        .unwrap_or(VersionBump::None)
}

/// Determine the version bump for raw commit messages.
///
/// Messages that are not well-formed conventional commits carry no release
/// signal and contribute nothing.
pub fn analyze_messages(messages: &[String]) -> VersionBump {
    let records: Vec<CommitRecord> = messages
        .iter()
        .filter_map(|message| CommitRecord::parse(message))
        .collect();
    analyze_records(&records)
}
