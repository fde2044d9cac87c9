//! The annotate command.

use anyhow::Context;
use owo_colors::OwoColorize;
use tracing::debug;

use headstamp_rs::FileAnnotator;

use crate::cli::args::{AnnotateArgs, OutputFormat};
use crate::cli::config_layer::build_layered_config;
use crate::cli::output::{completion_message, display_report, print_json_report};

/// Run the annotator with layered configuration and report the outcome.
///
/// Any error before or during the run propagates, so the completion message
/// is only printed once every selected file was handled. A run that recorded
/// failures under `--continue-on-error` exits with status 1 after reporting.
pub fn annotate_command(args: AnnotateArgs) -> anyhow::Result<()> {
    let annotator = FileAnnotator::new(build_layered_config(&args)?)?.with_dry_run(args.dry_run);
    let config = annotator.config();
    debug!("Effective configuration: {:?}", config);
    debug!(
        "Prepending {} line block to '{}' files",
        annotator.block().as_str().lines().count(),
        config.pattern
    );

    let report = annotator
        .run()
        .with_context(|| format!("Annotation of '{}' stopped", config.root_path.display()))?;

    match args.format {
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Text => display_report(&report),
    }

    if !report.is_success() {
        eprintln!(
            "{} {} of {} files could not be annotated",
            "❌".red(),
            report.failures.len(),
            report.files_matched()
        );
        std::process::exit(1);
    }

    if args.format == OutputFormat::Text {
        if report.dry_run {
            println!(
                "Dry run: {} {} files would be annotated.",
                report.annotated.len(),
                config.pattern
            );
        } else {
            println!("{}", completion_message(&config.pattern).bright_green());
        }
    }

    Ok(())
}
