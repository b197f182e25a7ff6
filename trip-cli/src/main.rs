//! Command-line interface for trip itineraries
//! This binary parses itinerary markdown and prints it in one of the supported formats,
//! or renders the companion prompt template with a start date.
//!
//! Usage:
//!   trip [`<path>`] [--format `<format>`] [--config `<file>`] [--images]  - Parse and print an itinerary
//!   trip --prompt [`<template>`] [--date `<YYYY-MM-DD>`]                 - Render the prompt template
//!   trip --list-formats                                               - List output formats
//!
//! Without a path the configured default locations are tried in order.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trip_config::{Loader, TripConfig};
use trip_parser::trip::formats::{serialize, Format};
use trip_parser::trip::imagery::{images_for_day, CuratedImages, LookupChain};
use trip_parser::trip::loader::{LoaderError, TripLoader};
use trip_parser::trip::prompt::PromptTemplate;
use trip_parser::Trip;

fn build_cli() -> Command {
    Command::new("trip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse markdown travel itineraries")
        .arg(
            Arg::new("path")
                .help("Itinerary file (or prompt template with --prompt)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json, treeviz or itinerary (default from config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("images")
                .long("images")
                .help("Also list the images found for each day")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("Render the prompt template instead of parsing an itinerary")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["images", "format"]),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .help("Trip start date for --prompt, YYYY-MM-DD (default: today)")
                .requires("prompt"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    init_logging(&config.logging.level)?;

    if matches.get_flag("prompt") {
        handle_prompt_command(matches, &config)
    } else {
        handle_parse_command(matches, &config)
    }
}

/// Parse failures get the same short message a user would see next to the input box,
/// followed by the precise reason.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<LoaderError>() {
        Some(LoaderError::Parse(parse_err)) => {
            eprintln!("{}", parse_err.user_message());
            eprintln!("  reason: {}", parse_err);
        }
        _ => eprintln!("Error: {:#}", err),
    }
}

fn load_config(matches: &ArgMatches) -> Result<TripConfig> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_local_file(),
    };
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build().context("failed to load configuration")
}

fn init_logging(level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Handle the default command: parse an itinerary and print it
fn handle_parse_command(matches: &ArgMatches, config: &TripConfig) -> Result<()> {
    let format: Format = config.output.format.parse()?;

    let loader = match matches.get_one::<String>("path") {
        Some(path) => TripLoader::from_path(path)?,
        None => TripLoader::load_first_available(config.loader.default_paths.as_slice())?,
    };
    let trip = loader.parse()?;
    tracing::info!(title = %trip.title, days = trip.days.len(), "parsed trip");

    let formatted = serialize(&trip, format)?;
    print!("{}", formatted);
    if !formatted.ends_with('\n') {
        println!();
    }

    if matches.get_flag("images") {
        print_images(&trip);
    }
    Ok(())
}

fn print_images(trip: &Trip) {
    let lookup = LookupChain::new().with(CuratedImages::builtin());
    println!();
    println!("Images:");
    for day in &trip.days {
        println!("  {}: {}", day.label, day.location());
        for image in images_for_day(day, &lookup) {
            println!(
                "    {} [{}] {}",
                image.caption,
                image.source.as_deref().unwrap_or("unknown"),
                image.url
            );
        }
    }
}

/// Handle --prompt: substitute the start date into the prompt template
fn handle_prompt_command(matches: &ArgMatches, config: &TripConfig) -> Result<()> {
    let text = match matches.get_one::<String>("path") {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt template {}", path))?,
        None => read_first_template(&config.prompt.template_paths)?,
    };

    let date = match matches.get_one::<String>("date") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))?,
        None => chrono::Local::now().date_naive(),
    };

    let rendered = PromptTemplate::new(text)
        .with_placeholder(config.prompt.placeholder.as_str())
        .render(date)?;
    print!("{}", rendered);
    Ok(())
}

fn read_first_template(paths: &[String]) -> Result<String> {
    for path in paths {
        match fs::read_to_string(path) {
            Ok(text) => return Ok(text),
            Err(err) => tracing::warn!(path = %path, %err, "prompt template unavailable"),
        }
    }
    bail!("no prompt template found (tried: {})", paths.join(", "))
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in Format::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
