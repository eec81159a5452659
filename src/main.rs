use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use deep_test_count::cli;
use deep_test_count::error::IoError;
use deep_test_count::logging::{self, Verbosity};
use deep_test_count::output::OutputFormatter;
use deep_test_count::Analyzer;
use std::io::Write;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    args.validate().context("Invalid arguments")?;
    let config = args.scan_config().context("Invalid configuration")?;

    let analyzer = Analyzer::new(config)?;
    let report = analyzer
        .run(&args.path)
        .with_context(|| format!("Failed to analyze {}", args.path.display()))?;

    let rendered = OutputFormatter::format(&report, args.format)?;

    match args.output_file {
        Some(ref path) => {
            std::fs::write(path, &rendered).map_err(|e| IoError::write_error(path, e))?;
            tracing::info!(path = %path.display(), format = args.format.as_str(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}
