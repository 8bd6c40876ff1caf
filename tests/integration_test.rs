// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_commit_derive_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "commit-derive", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("commit-derive"));
    assert!(stdout.contains("message"));
    assert!(stdout.contains("bump"));
    assert!(stdout.contains("changelog"));
}

#[test]
fn test_message_subcommand_synthesis() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "commit-derive",
            "--",
            "message",
            "--branch",
            "feature/core-add-cache",
            "--pr-title",
            "Add cache support",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "feat(core): Add cache support");
}

#[test]
fn test_message_subcommand_fails_closed() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "commit-derive",
            "--",
            "message",
            "--branch",
            "randomly/foo",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("randomly"));
}

#[test]
fn test_version_bump_detection() {
    use commit_derive::analyzer;
    use commit_derive::domain::VersionBump;

    let commit_messages = vec![
        "feat: add new authentication system".to_string(),
        "fix: resolve login issue".to_string(),
    ];

    let bump = analyzer::analyze_messages(&commit_messages);
    assert_eq!(bump, VersionBump::Minor);
}

#[test]
fn test_version_parsing_and_bumping() {
    use commit_derive::domain::{Version, VersionBump};

    let version = Version::parse("v1.2.3").expect("Should parse version");
    assert_eq!(version.major, 1);
    assert_eq!(version.minor, 2);
    assert_eq!(version.patch, 3);

    assert_eq!(version.bump(VersionBump::Minor), Version::new(1, 3, 0));
    assert_eq!(version.bump(VersionBump::Major), Version::new(2, 0, 0));
    assert_eq!(version.bump(VersionBump::Patch), Version::new(1, 2, 4));
    assert_eq!(version.bump(VersionBump::None), version);
}

#[test]
fn test_conventional_commit_parsing() {
    use commit_derive::domain::{CommitRecord, CommitType};

    let parsed = CommitRecord::parse("feat(auth): add new login system").expect("Should parse");
    assert_eq!(parsed.commit_type, CommitType::Feat);
    assert_eq!(parsed.scope, Some("auth".to_string()));
    assert_eq!(parsed.subject, "add new login system");
    assert!(!parsed.breaking);

    let parsed_breaking = CommitRecord::parse("feat!: remove deprecated API").expect("Should parse");
    assert_eq!(parsed_breaking.commit_type, CommitType::Feat);
    assert!(parsed_breaking.breaking);

    let breaking_with_footer = "feat: new feature\n\nBREAKING CHANGE: This changes the API";
    let parsed_footer = CommitRecord::parse(breaking_with_footer).expect("Should parse");
    assert!(parsed_footer.breaking);

    // Non-conventional messages carry no signal and do not parse
    assert_eq!(CommitRecord::parse("Update README"), None);
}

#[test]
fn test_changelog_rendering() {
    use commit_derive::changelog;

    let messages = vec![
        "feat(api): add user list endpoint".to_string(),
        "fix(ui): modal alignment".to_string(),
        "wip: scratch".to_string(),
    ];

    let records = changelog::collect_records(&messages);
    assert_eq!(records.len(), 2);

    let md = changelog::render("1.1.0", &records);
    assert!(md.contains("## 1.1.0"));
    assert!(md.contains("### Features"));
    assert!(md.contains("### Bug Fixes"));
    assert!(!md.contains("scratch"));
}

#[cfg(test)]
mod git_operations_tests {
    use commit_derive::git::{self, Git2Repository};
    use git2::Repository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Build a throwaway repo with a base commit and two branch commits
    fn setup_test_repo() -> (TempDir, git2::Oid) {
        let temp_dir = TempDir::new().expect("Could not create temp dir");

        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        let commit = |message: &str, content: &str, parents: &[git2::Oid]| -> git2::Oid {
            let content_path = temp_dir.path().join("README.md");
            fs::write(&content_path, content).expect("Could not write file");

            let mut index = repo.index().expect("Could not get index");
            index
                .add_path(Path::new("README.md"))
                .expect("Could not add file to index");
            index.write().expect("Could not write index");

            let tree_id = index.write_tree().expect("Could not write tree");
            let tree = repo.find_tree(tree_id).expect("Could not find tree");

            let parent_commits: Vec<git2::Commit> = parents
                .iter()
                .map(|oid| repo.find_commit(*oid).expect("Could not find parent"))
                .collect();
            let parent_refs: Vec<&git2::Commit> = parent_commits.iter().collect();

            repo.commit(
                Some("HEAD"),
                &repo.signature().expect("Could not get sig"),
                &repo.signature().expect("Could not get sig"),
                message,
                &tree,
                &parent_refs,
            )
            .expect("Could not create commit")
        };

        let base = commit("chore: initial commit", "Initial content\n", &[]);
        let second = commit("feat(core): add cache", "Updated content\n", &[base]);
        commit("fix: flush on exit", "More content\n", &[second]);

        (temp_dir, base)
    }

    #[test]
    fn test_git2_repository_open() {
        let (temp_dir, _) = setup_test_repo();
        assert!(Git2Repository::open(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_messages_since_base_commit() {
        let (temp_dir, base) = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Could not open repo");

        // The base commit's OID doubles as a revparse-able ref
        let messages = git::messages_since(&repo, &base.to_string()).expect("Could not collect");
        let messages: Vec<String> = messages.iter().map(|m| m.trim().to_string()).collect();

        assert_eq!(
            messages,
            vec![
                "feat(core): add cache".to_string(),
                "fix: flush on exit".to_string(),
            ]
        );
    }

    #[test]
    fn test_messages_feed_bump_analysis() {
        use commit_derive::analyzer;
        use commit_derive::domain::VersionBump;

        let (temp_dir, base) = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Could not open repo");

        let messages = git::messages_since(&repo, &base.to_string()).expect("Could not collect");
        assert_eq!(analyzer::analyze_messages(&messages), VersionBump::Minor);
    }

    #[test]
    fn test_unresolvable_ref_is_an_error() {
        let (temp_dir, _) = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).expect("Could not open repo");

        assert!(git::messages_since(&repo, "origin/missing").is_err());
    }
}
