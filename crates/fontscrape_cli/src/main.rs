//! fontscrape - find the font files a subtitle script needs.
//!
//! Usage:
//!   fontscrape match --fonts ./fonts episode01.ass episode02.ass
//!   fontscrape lookup --fonts ./fonts "Gill Sans"
//!   fontscrape init-config fontscrape.toml

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use fontscrape_core::config::{ConfigManager, Settings};
use fontscrape_core::fonts::{FontLibrary, MatchStrategy, TtfMetadataProvider};
use fontscrape_core::logging::init_tracing;
use fontscrape_core::pipeline::{self, BatchReport};

#[derive(Parser, Debug)]
#[command(
    name = "fontscrape",
    version,
    about = "Match the fonts used by SSA/ASS subtitles against a font directory"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the fonts required by subtitle files
    Match {
        /// Font directory (overrides the config file)
        #[arg(long)]
        fonts: Option<PathBuf>,

        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Minimum similarity score (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// Matching strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Never fall back to family-only matches
        #[arg(long, default_value_t = false)]
        no_downgrade: bool,

        /// Print a JSON report instead of font paths
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Subtitle files (default: *.ssa/*.ass in the current directory)
        subtitles: Vec<PathBuf>,
    },

    /// List the library fonts whose family resembles FAMILY
    Lookup {
        /// Font directory
        #[arg(long)]
        fonts: Option<PathBuf>,

        /// Minimum similarity score (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// Family name to look up
        family: String,
    },

    /// Write a default config file (an existing one is validated, not overwritten)
    InitConfig {
        /// Destination path
        #[arg(default_value = "fontscrape.toml")]
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    FullName,
    Families,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FullName => MatchStrategy::FullName,
            StrategyArg::Families => MatchStrategy::Families,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Match {
            fonts,
            config,
            threshold,
            strategy,
            no_downgrade,
            json,
            subtitles,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            if let Some(dir) = fonts {
                settings.library.font_dir = dir.to_string_lossy().into_owned();
            }
            if let Some(threshold) = threshold {
                settings.matching.threshold = threshold;
            }
            if let Some(strategy) = strategy {
                settings.matching.strategy = strategy.into();
            }
            if no_downgrade {
                settings.matching.downgrade = false;
            }
            start_logging(&settings, cli.verbose);

            let subtitles = if subtitles.is_empty() {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                pipeline::discover_subtitles(&cwd)
                    .with_context(|| format!("Failed to list subtitles in {}", cwd.display()))?
            } else {
                subtitles
            };

            let report = pipeline::run(&settings, &subtitles).with_context(|| {
                format!("Failed to index fonts in {}", settings.library.font_dir)
            })?;

            if json {
                print_json(&report)?;
            } else {
                for font in report.fonts() {
                    println!("{}", font.path().display());
                }
            }

            if report.failed().next().is_some() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Lookup {
            fonts,
            threshold,
            family,
        } => {
            let mut settings = Settings::default();
            if let Some(dir) = fonts {
                settings.library.font_dir = dir.to_string_lossy().into_owned();
            }
            start_logging(&settings, cli.verbose);

            let library = FontLibrary::build(
                &settings.library.font_dir,
                &TtfMetadataProvider,
                settings.library.metadata_errors,
            )
            .with_context(|| format!("Failed to index fonts in {}", settings.library.font_dir))?
            .with_similarity(Box::new(settings.matching.similarity));

            let threshold = threshold.unwrap_or(settings.matching.threshold);
            for result in library.find_by_family(&family, threshold) {
                println!(
                    "[{:>3}%] {}, {} -> {}",
                    result.family_match_score,
                    result.font.family,
                    result.font.subfamily_display(),
                    result.font.path().display()
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::InitConfig { path } => {
            let existed = path.exists();
            let mut manager = ConfigManager::new(&path);
            manager
                .load_or_create()
                .with_context(|| format!("Failed to initialize config at {}", path.display()))?;
            if existed {
                println!("Config already exists at {}", path.display());
            } else {
                println!("Wrote default config to {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let Some(path) = config else {
        return Ok(Settings::default());
    };
    let mut manager = ConfigManager::new(path);
    manager
        .load()
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok(manager.into_settings())
}

fn start_logging(settings: &Settings, verbose: u8) {
    let mut level = settings.logging.level;
    for _ in 0..verbose {
        level = level.more_verbose();
    }
    init_tracing(level);
}

fn print_json(report: &BatchReport) -> Result<()> {
    let mut documents = Vec::with_capacity(report.documents.len());
    for doc in &report.documents {
        documents.push(json!({
            "path": doc.path,
            "error": doc.error.as_ref().map(|e| e.to_string()),
            "resolved": serde_json::to_value(&doc.resolved)?,
            "unresolved": serde_json::to_value(&doc.unresolved)?,
        }));
    }

    let fonts: Vec<&Path> = report.fonts().into_iter().map(|font| font.path()).collect();
    let output = json!({
        "documents": documents,
        "fonts": fonts,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
