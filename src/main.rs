//! Prayer Times Companion - Main Entry Point
//!
//! No arguments: the display flow (today's timings, Ramadan view,
//! upcoming sacred days). `settings`: the settings flow (method catalog,
//! current values, optional edits).

use adhan_times::api::ApiClient;
use adhan_times::display::{self, DisplayModel};
use adhan_times::error::{AppError, Result};
use adhan_times::holidays;
use adhan_times::location::{resolve_location, IpGeoProvider};
use adhan_times::logging::{init_logging, parse_log_level, LoggingSetup};
use adhan_times::methods::{self, CalculationMethod};
use adhan_times::settings::{LocationMode, Settings, SettingsStore};
use chrono::{Datelike, Local};
use log::{error, warn};

const USAGE: &str = "Usage: adhan_times [settings [--mode geo|city] [--city NAME] \
[--country NAME] [--method ID] [--school ID] [--hijri-adjustment DAYS]]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let store = SettingsStore::new()?;
    let settings = store.load()?;

    init_logging(LoggingSetup {
        level: parse_log_level(&settings.logging.level),
        log_dir: store.log_dir(),
        max_file_size: settings.logging.max_file_size,
        max_files: settings.logging.max_files,
    })?;

    let client = ApiClient::new();

    match args.first().map(String::as_str) {
        None => display_flow(&settings, &client),
        Some("settings") => settings_flow(&store, settings, &client, &args[1..]),
        Some(other) => {
            eprintln!("{}", USAGE);
            Err(AppError::ConfigError(format!("Unknown command: {}", other)))
        }
    }
}

/// Display flow: locate, fetch timings, fetch holidays, render.
/// Every failure collapses to the same generic rendering.
fn display_flow(settings: &Settings, client: &ApiClient) -> Result<()> {
    match load_display(settings, client) {
        Ok(model) => display::render(&model),
        Err(e) => {
            warn!("Display flow failed: {}", e);
            display::render_error();
        }
    }
    Ok(())
}

fn load_display(settings: &Settings, client: &ApiClient) -> Result<DisplayModel> {
    let provider = IpGeoProvider::new();
    let location = resolve_location(settings, &provider)?;

    let timings = client.timings(settings, &location)?;

    let today = Local::now().date_naive();
    let entries = client.calendar(settings, &location, today.month(), today.year())?;
    let upcoming = holidays::upcoming_holidays(&entries, today);

    Ok(DisplayModel::build(&timings, &location.label(), upcoming))
}

/// Settings flow: load the catalog (with fallback), apply flag edits,
/// save, list catalog and current values.
fn settings_flow(
    store: &SettingsStore,
    mut settings: Settings,
    client: &ApiClient,
    args: &[String],
) -> Result<()> {
    let catalog = methods::load_catalog(client);

    let edited = apply_edits(&mut settings, args)?;
    if edited {
        store.save(&settings)?;
        settings = settings.normalized();
    }

    print_catalog(&catalog, &settings);
    print_settings(&settings);

    if edited {
        display::flash_status("Saved.");
    }
    Ok(())
}

fn apply_edits(settings: &mut Settings, args: &[String]) -> Result<bool> {
    let mut edited = false;
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| AppError::ConfigError(format!("Missing value for {}", flag)))?;

        match flag.as_str() {
            "--mode" => {
                settings.location_mode = match value.as_str() {
                    "geo" => LocationMode::Geo,
                    "city" => LocationMode::City,
                    other => {
                        return Err(AppError::ConfigError(format!(
                            "Unknown location mode: {}",
                            other
                        )))
                    }
                }
            }
            "--city" => settings.city = value.clone(),
            "--country" => settings.country = value.clone(),
            "--method" => settings.method = value.clone(),
            "--school" => settings.school = value.clone(),
            "--hijri-adjustment" => settings.hijri_adjustment = value.clone(),
            other => {
                eprintln!("{}", USAGE);
                return Err(AppError::ConfigError(format!("Unknown flag: {}", other)));
            }
        }
        edited = true;
    }

    Ok(edited)
}

fn print_catalog(catalog: &[CalculationMethod], settings: &Settings) {
    println!("Calculation methods");
    for method in catalog {
        let marker = if method.id.to_string() == settings.method {
            " *"
        } else {
            ""
        };
        println!("  {:>3}  {} ({}){}", method.id, method.name, method.id, marker);
    }

    // A saved id missing from the live catalog is reported, never rewritten
    if !catalog.iter().any(|m| m.id.to_string() == settings.method) {
        warn!("Saved method id {} not in the current catalog", settings.method);
        println!("  saved method {} (not in current catalog)", settings.method);
    }
    println!();
}

fn print_settings(settings: &Settings) {
    let mode = match settings.location_mode {
        LocationMode::Geo => "geo",
        LocationMode::City => "city",
    };
    println!("Current settings");
    println!("  {:<17} {}", "mode", mode);
    println!("  {:<17} {}", "city", settings.city);
    println!("  {:<17} {}", "country", settings.country);
    println!("  {:<17} {}", "method", settings.method);
    println!("  {:<17} {}", "school", settings.school);
    println!("  {:<17} {}", "hijri-adjustment", settings.hijri_adjustment);
}
