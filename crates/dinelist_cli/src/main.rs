//! `dinelist`: interactively append one restaurant to the site's store.
//!
//! # Responsibility
//! - Parse flags into an `EntryConfig`.
//! - Start file logging, run the entry pipeline over stdin/stdout.
//! - Report failures on stderr with a non-zero exit status.

use clap::Parser;
use dinelist_core::{
    default_log_dir, default_log_level, init_logging, ConfigOverrides, EntryConfig, EntryError,
    EntryOutcome, EntryService, LinePrompter, ProvisionOutcome,
};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_INPUT_ERROR: u8 = 1;
const EXIT_IO_ERROR: u8 = 2;

/// Command-line arguments for dinelist
#[derive(Parser, Debug)]
#[command(name = "dinelist")]
#[command(about = "Add a restaurant entry to the site's JSON store")]
#[command(version)]
struct Args {
    /// Site root; relative paths below are resolved against it
    #[arg(long, default_value = ".", env = "DINELIST_SITE_ROOT")]
    site_root: PathBuf,

    /// Restaurant store file (default: data/restaurants.json)
    #[arg(long, env = "DINELIST_STORE")]
    store: Option<PathBuf>,

    /// Area reference table (default: data/areas.json)
    #[arg(long, env = "DINELIST_AREAS")]
    areas: Option<PathBuf>,

    /// Cuisine reference table (default: data/cuisines.json)
    #[arg(long, env = "DINELIST_CUISINES")]
    cuisines: Option<PathBuf>,

    /// Media root directory (default: images)
    #[arg(long, env = "DINELIST_MEDIA_ROOT")]
    media_root: Option<PathBuf>,

    /// Placeholder cover photo (default: images/placeholder.jpg)
    #[arg(long, env = "DINELIST_PLACEHOLDER")]
    placeholder: Option<PathBuf>,

    /// Cover photo extension (default: jpg)
    #[arg(long, env = "DINELIST_PHOTO_EXT")]
    photo_ext: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "DINELIST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log directory (absolute; default under the system temp dir)
    #[arg(long, env = "DINELIST_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Prompt and assemble, print the record, write nothing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&log_level, &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    info!(
        "event=cli_start module=cli status=ok dry_run={} store={}",
        args.dry_run,
        config.store_path.display()
    );
    let service = EntryService::new(config);
    let stdin = io::stdin();
    let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());

    match service.run(&mut prompter, args.dry_run) {
        Ok(outcome) => {
            if let Err(err) = report(prompter.output_mut(), &service, &outcome) {
                eprintln!("error: failed to print summary: {err}");
                return ExitCode::from(EXIT_IO_ERROR);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn build_config(args: &Args) -> Result<EntryConfig, String> {
    let site_root = if args.site_root.is_absolute() {
        args.site_root.clone()
    } else {
        std::env::current_dir()
            .map_err(|err| format!("cannot resolve current directory: {err}"))?
            .join(&args.site_root)
    };

    EntryConfig::with_overrides(
        site_root,
        ConfigOverrides {
            store_path: args.store.clone(),
            areas_path: args.areas.clone(),
            cuisines_path: args.cuisines.clone(),
            media_root: args.media_root.clone(),
            placeholder_path: args.placeholder.clone(),
            photo_extension: args.photo_ext.clone(),
        },
    )
    .map_err(|err| err.to_string())
}

fn exit_code_for(err: &EntryError) -> u8 {
    if err.category().is_input_error() {
        EXIT_INPUT_ERROR
    } else {
        EXIT_IO_ERROR
    }
}

fn report(out: &mut impl Write, service: &EntryService, outcome: &EntryOutcome) -> io::Result<()> {
    let config = service.config();
    if !outcome.committed() {
        writeln!(out, "dry run: nothing was written")?;
        let json = to_pretty_json(&outcome.record)?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    writeln!(
        out,
        "added `{}` to {}",
        outcome.record.slug,
        config.display_path(&outcome.store_path).display()
    )?;
    let photo = config.display_path(&outcome.photo_path).display();
    match outcome.photo {
        Some(ProvisionOutcome::Copied) => writeln!(out, "placeholder photo copied to {photo}"),
        Some(ProvisionOutcome::AlreadyPresent) => writeln!(out, "photo already present at {photo}"),
        Some(ProvisionOutcome::PlaceholderMissing) | None => {
            writeln!(out, "add a cover photo at {photo}")
        }
    }
}

fn to_pretty_json(record: &dinelist_core::Restaurant) -> io::Result<String> {
    serde_json::to_string_pretty(record).map_err(io::Error::other)
}
