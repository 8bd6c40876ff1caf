use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use commit_derive::config::{self, Config};
use commit_derive::domain::Version;
use commit_derive::git::Git2Repository;
use commit_derive::{analyzer, changelog, deriver, git, ui};

#[derive(clap::Parser)]
#[command(
    name = "commit-derive",
    version,
    about = "Derive conventional commit messages and version bumps from branch names and PR titles"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize the squashed commit message for a branch push or PR
    Message {
        #[arg(short, long, help = "Branch name, e.g. feature/core-add-cache")]
        branch: String,

        #[arg(long, help = "Pull request title, used as the commit subject")]
        pr_title: Option<String>,

        #[arg(long, help = "Pull request description, scanned for breaking-change markers")]
        pr_body: Option<String>,

        #[arg(long, help = "Read the pull request description from a file")]
        pr_body_file: Option<String>,
    },
    /// Compute the version bump decision for a set of commit messages
    Bump {
        #[arg(long, help = "Current version or tag, e.g. v1.2.3")]
        current: Option<String>,

        #[arg(short, long, help = "File with one commit message per line")]
        input: Option<String>,

        #[arg(long, help = "Collect commits from git since this base ref")]
        from: Option<String>,

        #[arg(long, help = "Collect commits from the enclosing git repository")]
        git: bool,
    },
    /// Render a grouped changelog section for a set of commit messages
    Changelog {
        #[arg(long, help = "Version heading for the rendered section")]
        version: Option<String>,

        #[arg(short, long, help = "File with one commit message per line")]
        input: Option<String>,

        #[arg(long, help = "Collect commits from git since this base ref")]
        from: Option<String>,

        #[arg(long, help = "Collect commits from the enclosing git repository")]
        git: bool,

        #[arg(short, long, help = "Write the rendered markdown to a file")]
        output: Option<String>,

        #[arg(long, help = "Prepend the rendered section to this changelog file")]
        prepend: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Message {
            branch,
            pr_title,
            pr_body,
            pr_body_file,
        } => run_message(&config, &branch, pr_title, pr_body, pr_body_file),
        Command::Bump {
            current,
            input,
            from,
            git,
        } => run_bump(&config, current, input, from, git),
        Command::Changelog {
            version,
            input,
            from,
            git,
            output,
            prepend,
        } => run_changelog(&config, version, input, from, git, output, prepend),
    }
}

fn run_message(
    config: &Config,
    branch: &str,
    pr_title: Option<String>,
    pr_body: Option<String>,
    pr_body_file: Option<String>,
) -> Result<()> {
    let body = match (pr_body, pr_body_file) {
        (Some(body), _) => Some(body),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) => None,
    };

    let derived = match deriver::derive_commit(
        branch,
        pr_title.as_deref(),
        body.as_deref(),
        &config.conventional_commits,
    ) {
        Ok(derived) => derived,
        Err(e) => {
            // Fail closed: an incorrect guess would corrupt the changelog
            // and version history once merged
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if derived.is_override() {
        ui::display_status("PR title is already a conventional commit; using it as-is");
    }

    println!("{}", derived.record());
    Ok(())
}

fn run_bump(
    config: &Config,
    current: Option<String>,
    input: Option<String>,
    from: Option<String>,
    use_git: bool,
) -> Result<()> {
    let messages = read_messages(config, input, from, use_git)?;

    if messages.is_empty() {
        ui::display_status("No commits to analyze; release will be skipped");
    } else {
        ui::display_commit_analysis(&messages);
    }

    let bump = analyzer::analyze_messages(&messages);

    let current_version = match current {
        Some(raw) => Version::parse(&raw)?,
        None => Version::parse(&config.release.initial_version)?,
    };
    let next_version = current_version.bump(bump);

    println!("bump={}", bump);
    println!("version={}", next_version);
    println!("release={}", bump.triggers_release());
    Ok(())
}

fn run_changelog(
    config: &Config,
    version: Option<String>,
    input: Option<String>,
    from: Option<String>,
    use_git: bool,
    output: Option<String>,
    prepend: Option<String>,
) -> Result<()> {
    let messages = read_messages(config, input, from, use_git)?;
    let records = changelog::collect_records(&messages);

    let heading = version.unwrap_or_else(|| changelog::UNRELEASED.to_string());
    let rendered = changelog::render(&heading, &records);

    if let Some(path) = &output {
        fs::write(path, &rendered)?;
        ui::display_success(&format!("Wrote changelog section to {}", path));
    }

    if let Some(path) = &prepend {
        let existing = if Path::new(path).exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };
        let combined = if existing.is_empty() {
            rendered.clone()
        } else {
            format!("{}\n{}", rendered, existing)
        };
        fs::write(path, combined)?;
        ui::display_success(&format!("Prepended changelog section to {}", path));
    }

    if output.is_none() && prepend.is_none() {
        print!("{}", rendered);
    }

    Ok(())
}

/// Gather commit messages from a file, the enclosing git repository, or stdin.
fn read_messages(
    config: &Config,
    input: Option<String>,
    from: Option<String>,
    use_git: bool,
) -> Result<Vec<String>> {
    if let Some(path) = input {
        let content = fs::read_to_string(path)?;
        return Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect());
    }

    if use_git || from.is_some() {
        let repo = Git2Repository::open(".")?;
        let base_ref = from.unwrap_or_else(|| config.release.base_ref.clone());
        return Ok(git::messages_since(&repo, &base_ref)?);
    }

    let stdin = io::stdin();
    let mut messages = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            messages.push(trimmed.to_string());
        }
    }
    Ok(messages)
}
