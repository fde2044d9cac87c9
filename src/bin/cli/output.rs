//! Output formatting for annotation runs and configuration summaries.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use headstamp_rs::{AnnotationReport, HeadstampConfig};

/// Completion line printed after a successful run.
///
/// A plain extension glob such as `*.rs` is named by its extension (`.rs`);
/// any other pattern is shown as written.
pub fn completion_message(pattern: &str) -> String {
    let label = match pattern.strip_prefix('*') {
        Some(ext) if ext.starts_with('.') && !ext.contains(['*', '?', '[', '{', '/']) => ext,
        _ => pattern,
    };
    format!("Comment added to all {label} files successfully.")
}

/// Print the report as pretty JSON on stdout.
pub fn print_json_report(report: &AnnotationReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print a human-readable summary of a run.
pub fn display_report(report: &AnnotationReport) {
    /// Row for the run summary table.
    #[derive(Tabled)]
    struct SummaryRow {
        outcome: String,
        files: usize,
    }

    let annotated_label = if report.dry_run {
        "Would annotate"
    } else {
        "Annotated"
    };

    let rows = vec![
        SummaryRow {
            outcome: annotated_label.to_string(),
            files: report.annotated.len(),
        },
        SummaryRow {
            outcome: "Already annotated".to_string(),
            files: report.skipped.len(),
        },
        SummaryRow {
            outcome: "Failed".to_string(),
            files: report.failures.len(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    if report.dry_run {
        for path in &report.annotated {
            println!("  {} {}", "+".green(), path.display());
        }
        for path in &report.skipped {
            println!("  {} {}", "=".dimmed(), path.display());
        }
    }

    if !report.failures.is_empty() {
        println!();
        println!("{}", "Failures".red().bold());

        /// Row for the failures table.
        #[derive(Tabled)]
        struct FailureRow {
            path: String,
            error: String,
        }

        let failure_rows: Vec<FailureRow> = report
            .failures
            .iter()
            .map(|failure| FailureRow {
                path: failure.path.display().to_string(),
                error: failure.error.clone(),
            })
            .collect();

        let mut table = Table::new(failure_rows);
        table.with(TableStyle::rounded());
        println!("{}", table);
    }
}

/// Print the settings that drive a run.
pub fn display_config_summary(config: &HeadstampConfig, show_text: bool) {
    /// Row for configuration display table.
    #[derive(Tabled)]
    struct ConfigRow {
        setting: String,
        value: String,
    }

    let excludes = if config.exclude_patterns.is_empty() {
        "none".to_string()
    } else {
        config.exclude_patterns.join(", ")
    };

    let config_rows = vec![
        ConfigRow {
            setting: "Root".to_string(),
            value: config.root_path.display().to_string(),
        },
        ConfigRow {
            setting: "Pattern".to_string(),
            value: config.pattern.clone(),
        },
        ConfigRow {
            setting: "Excludes".to_string(),
            value: excludes,
        },
        ConfigRow {
            setting: "Annotation Lines".to_string(),
            value: config.annotation_text.lines().count().to_string(),
        },
        ConfigRow {
            setting: "Gitignore Rules".to_string(),
            value: config.respect_gitignore.to_string(),
        },
        ConfigRow {
            setting: "Skip Annotated".to_string(),
            value: config.skip_annotated.to_string(),
        },
        ConfigRow {
            setting: "On Failure".to_string(),
            value: format!("{:?}", config.failure_policy).to_lowercase(),
        },
    ];

    let mut table = Table::new(config_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    println!();

    if show_text {
        println!("{}", "Annotation text".bright_blue().bold());
        println!("{}", config.annotation_text.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_message_names_the_extension() {
        assert_eq!(
            completion_message("*.rs"),
            "Comment added to all .rs files successfully."
        );
        assert_eq!(
            completion_message("*.proto"),
            "Comment added to all .proto files successfully."
        );
    }

    #[test]
    fn completion_message_keeps_other_patterns_verbatim() {
        assert_eq!(
            completion_message("mod_*.rs"),
            "Comment added to all mod_*.rs files successfully."
        );
        assert_eq!(
            completion_message("*.{rs,toml}"),
            "Comment added to all *.{rs,toml} files successfully."
        );
    }
}
