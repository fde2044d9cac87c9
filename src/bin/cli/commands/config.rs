//! Configuration management commands.
//!
//! Initialization, validation, and printing of defaults.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::output::display_config_summary;
use headstamp_rs::HeadstampConfig;

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default headstamp configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: headstamp annotate --config your-config.yml".dimmed()
    );
    println!();

    let config = HeadstampConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    HeadstampConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit root_path, pattern and annotation_text");
    println!(
        "   2. Run with: {}",
        format!("headstamp annotate --config {}", args.output.display()).cyan()
    );
    println!();

    /// Row type for the configuration tips table.
    #[derive(Tabled)]
    struct CustomizationRow {
        setting: String,
        description: String,
    }

    let customization_rows = vec![
        CustomizationRow {
            setting: "exclude_patterns".to_string(),
            description: "Globs relative to root_path that are never touched".to_string(),
        },
        CustomizationRow {
            setting: "respect_gitignore".to_string(),
            description: "Skip files ignored by .gitignore/.ignore (default: false)".to_string(),
        },
        CustomizationRow {
            setting: "skip_annotated".to_string(),
            description: "Do not prepend the block twice (default: false)".to_string(),
        },
        CustomizationRow {
            setting: "failure_policy".to_string(),
            description: "abort (default) or continue past unwritable files".to_string(),
        },
    ];

    let mut table = Table::new(customization_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a headstamp configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let loaded = HeadstampConfig::from_yaml_file(&args.config).and_then(|config| {
        config.validate()?;
        Ok(config)
    });

    let config = match loaded {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Make sure annotation_text is not blank");
            println!("   • Make sure pattern and exclude_patterns are valid globs");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'headstamp print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    display_config_summary(&config, args.show_text);

    Ok(())
}
