use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shortener::config::Config;
use shortener::watermark::{panel_label, resolve_image_path, Variant, Watermark};
use shortener::ShortenerError;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Shortener - watermark panels for images behind short links
#[derive(Parser, Debug)]
#[command(name = "shortener")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watermark one image and write the encoded result
    Watermark {
        /// Image path, resolved below the configured root
        path: String,

        /// Short-link host drawn on the panel
        #[arg(long)]
        host: String,

        /// Link hash appended to the host
        #[arg(long)]
        link_hash: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the configured layout variant
        #[arg(long)]
        variant: Option<Variant>,
    },

    /// Test configuration and exit
    Check,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Exit status 2 when the requested image does not exist, 1 otherwise.
fn exit_status(err: &anyhow::Error) -> u8 {
    let not_found = err
        .downcast_ref::<ShortenerError>()
        .is_some_and(ShortenerError::is_not_found);
    if not_found {
        2
    } else {
        1
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_file(&args.config)
        .map_err(ShortenerError::Config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;

    shortener::logging::init_subscriber(&config.logging).map_err(ShortenerError::Logging)?;

    config
        .validate()
        .map_err(ShortenerError::Config)
        .context("Invalid configuration")?;
    let watermark_config = config.watermark_config().map_err(ShortenerError::from)?;

    tracing::info!(
        config_file = %args.config.display(),
        variant = %watermark_config.variant,
        logo = watermark_config.logo.is_some(),
        root = ?config.shortener.root,
        "Configuration loaded successfully"
    );

    match args.command {
        Command::Check => Ok(()),
        Command::Watermark {
            path,
            host,
            link_hash,
            output,
            variant,
        } => {
            let watermark_config = match variant {
                Some(variant) => watermark_config.with_variant(variant),
                None => watermark_config,
            };

            let source = resolve_image_path(config.shortener.root.as_deref(), &path)
                .map_err(ShortenerError::from)?;
            let label = panel_label(&host, link_hash.as_deref());

            let encoded = Watermark::new(watermark_config)
                .apply(&source, &label)
                .map_err(ShortenerError::from)
                .with_context(|| format!("Failed to watermark {}", source.display()))?;

            match &output {
                Some(file) => std::fs::write(file, &encoded.data)
                    .map_err(ShortenerError::from)
                    .with_context(|| format!("Failed to write {}", file.display()))?,
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout
                        .write_all(&encoded.data)
                        .and_then(|()| stdout.flush())
                        .map_err(ShortenerError::from)?;
                }
            }

            tracing::info!(
                source = %source.display(),
                media_type = encoded.media_type,
                bytes = encoded.len(),
                "Watermarked image written"
            );
            Ok(())
        }
    }
}
