// Shift Calendar Application
// Main entry point: CLI surface over the calendar services

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};

use shift_calendar::models::{AppSettings, DateKey, FirstDayOfWeek, MonthSummary};
use shift_calendar::services::database::Database;
use shift_calendar::services::exchange;
use shift_calendar::services::grid::{generate_month_grid, weekday_headers};
use shift_calendar::services::holidays::is_holiday;
use shift_calendar::services::settings::SettingsService;
use shift_calendar::services::store::{add_event, remove_event, EventStore, StoreService};
use shift_calendar::services::summary::summarize;
use shift_calendar::services::sync::SyncService;
use shift_calendar::utils::date::is_weekend;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Parser)]
#[command(name = "shift-calendar")]
#[command(about = "Track work shifts on a monthly calendar against a work-hour norm")]
struct Cli {
    /// Use an explicit database file instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with events and the work-norm summary
    Show {
        /// Year to display (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Show only the work-norm summary for a month
    Summary {
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Add an event label at a date
    Add {
        /// Date in YYYY-MM-DD form
        date: NaiveDate,
        /// Event label (nocka, dniówka, nadgodziny, urlop, or free text)
        label: String,
    },
    /// Remove an event label from a date
    Remove {
        date: NaiveDate,
        label: String,
    },
    /// Delete all calendar events
    Clear {
        /// Confirm the deletion; without this flag nothing happens
        #[arg(long)]
        yes: bool,
    },
    /// Fetch the remote schedule and merge it into the local store
    Sync,
    /// Replace the local event store with the contents of a JSON file
    Import { file: PathBuf },
    /// Export the full event store to a pretty-printed JSON file
    Export { file: Option<PathBuf> },
    /// Read or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,
    /// Set the first day of the week (monday or sunday)
    FirstDay { value: FirstDayOfWeek },
    /// Set the shift length in hours (1-24)
    WorkHours { value: u32 },
    /// Enable or disable weekend highlighting
    HighlightWeekends {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Set the remote schedule URL (web-viewer links are rewritten to raw)
    Url { value: String },
    /// Restore the default schedule URL
    ResetUrl,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let db = open_database(cli.database.as_deref())?;
    db.initialize_schema()?;

    match cli.command {
        Commands::Show { year, month } => cmd_show(&db, year, month),
        Commands::Summary { year, month } => cmd_summary(&db, year, month),
        Commands::Add { date, label } => cmd_add(&db, date, &label),
        Commands::Remove { date, label } => cmd_remove(&db, date, &label),
        Commands::Clear { yes } => cmd_clear(&db, yes),
        Commands::Sync => cmd_sync(&db),
        Commands::Import { file } => cmd_import(&db, &file),
        Commands::Export { file } => cmd_export(&db, file.as_deref()),
        Commands::Config(config) => cmd_config(&db, config),
    }
}

fn open_database(path: Option<&Path>) -> Result<Database> {
    match path {
        Some(path) => {
            let path_str = path.to_str().context("Database path is not valid UTF-8")?;
            Database::new(path_str)
        }
        None => Database::open_default(),
    }
}

/// Resolve optional CLI year/month (1-based) to the zero-based month cursor,
/// defaulting to the current month.
fn resolve_month(year: Option<i32>, month: Option<u32>) -> Result<(i32, u32)> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month1 = month.unwrap_or_else(|| today.month());

    if !(1..=12).contains(&month1) {
        anyhow::bail!("Month must be between 1 and 12, got {}", month1);
    }

    Ok((year, month1 - 1))
}

fn cmd_show(db: &Database, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let (year, month0) = resolve_month(year, month)?;
    let settings = SettingsService::new(db).load()?;
    let store = StoreService::new(db).load()?;

    render_grid(&store, &settings, year, month0);
    render_events(&store, year, month0);
    render_summary(
        &summarize(&store, year, month0, settings.work_hours),
        settings.work_hours,
    );

    Ok(())
}

fn cmd_summary(db: &Database, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let (year, month0) = resolve_month(year, month)?;
    let settings = SettingsService::new(db).load()?;
    let store = StoreService::new(db).load()?;

    println!("{} {}", MONTH_NAMES[month0 as usize], year);
    render_summary(
        &summarize(&store, year, month0, settings.work_hours),
        settings.work_hours,
    );

    Ok(())
}

fn render_grid(store: &EventStore, settings: &AppSettings, year: i32, month0: u32) {
    println!("\n{} {}\n", MONTH_NAMES[month0 as usize], year);

    for header in weekday_headers(settings.first_day_of_week) {
        print!("{:>6}", header);
    }
    println!();

    let today = DateKey::today();
    let cells = generate_month_grid(year, month0, settings.first_day_of_week);
    for (index, cell) in cells.iter().enumerate() {
        let mut label = if cell.outside_month {
            format!("({})", cell.day)
        } else if settings.highlight_weekends
            && cell.date_key.to_date().is_some_and(is_weekend)
        {
            format!("[{}]", cell.day)
        } else {
            cell.day.to_string()
        };

        if !cell.outside_month {
            if store.contains_key(&cell.date_key) {
                label.push('*');
            }
            if is_holiday(year, month0, cell.day) {
                label.push('#');
            }
            if cell.date_key == today {
                label.push('!');
            }
        }

        print!("{:>6}", label);
        if index % 7 == 6 {
            println!();
        }
    }

    println!("\n  * events   # holiday   ! today   [n] weekend");
}

fn render_events(store: &EventStore, year: i32, month0: u32) {
    let entries: Vec<_> = store
        .iter()
        .filter(|(date, _)| date.in_month(year, month0))
        .collect();
    if entries.is_empty() {
        return;
    }

    println!("\nEvents:");
    for (date, labels) in entries {
        println!("  {:>2}: {}", date.day, labels.join(", "));
    }
}

fn render_summary(summary: &MonthSummary, work_hours: u32) {
    let sign = if summary.is_over_norm() { "over" } else { "under" };

    println!("\nSummary:");
    println!("  Night shifts:    {}", summary.night_shifts);
    println!("  Day shifts:      {}", summary.day_shifts);
    println!("  Overtime:        {}", summary.overtime_days);
    println!("  Vacation:        {}", summary.vacation_days);
    println!(
        "  Worked:          {} days / {} h",
        summary.worked_days, summary.worked_hours
    );
    println!(
        "  Norm:            {} shifts of {} h / {} h",
        summary.norm_shift_days, work_hours, summary.norm_hours
    );
    println!(
        "  Balance:         {:+} days / {:+} h ({} norm)",
        summary.day_delta, summary.hour_delta, sign
    );
    if summary.holiday_count > 0 {
        println!("  Public holidays: {}", summary.holiday_count);
    }
}

fn cmd_add(db: &Database, date: NaiveDate, label: &str) -> Result<()> {
    let store_service = StoreService::new(db);
    let mut store = store_service.load()?;
    let key = DateKey::from_date(date);

    if add_event(&mut store, key, label) {
        store_service.save(&store)?;
        println!("Added '{}' on {}", label.trim(), date);
    } else {
        println!("'{}' is already present on {} (or the label is empty)", label, date);
    }

    Ok(())
}

fn cmd_remove(db: &Database, date: NaiveDate, label: &str) -> Result<()> {
    let store_service = StoreService::new(db);
    let mut store = store_service.load()?;
    let key = DateKey::from_date(date);

    if remove_event(&mut store, key, label) {
        store_service.save(&store)?;
        println!("Removed '{}' from {}", label, date);
    } else {
        println!("No event '{}' on {}", label, date);
    }

    Ok(())
}

fn cmd_clear(db: &Database, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("This deletes all calendar events and cannot be undone. Re-run with --yes to confirm.");
    }

    StoreService::new(db).save(&EventStore::new())?;
    println!("All calendar events deleted.");
    Ok(())
}

fn cmd_sync(db: &Database) -> Result<()> {
    let settings = SettingsService::new(db).load()?;
    let store_service = StoreService::new(db);
    let mut store = store_service.load()?;

    let sync = SyncService::new(db)?;
    match sync.run(&mut store, &settings) {
        Ok(outcome) => {
            if outcome.changed {
                println!(
                    "Schedule loaded: {} remote dates, new events merged.",
                    outcome.incoming_entries
                );
            } else {
                println!(
                    "Schedule loaded: {} remote dates, already up to date.",
                    outcome.incoming_entries
                );
            }
            Ok(())
        }
        Err(err) => {
            // With no local data there is nothing to show at all, so spell
            // the situation out instead of only failing.
            if store.is_empty() {
                eprintln!("Unable to fetch the schedule and no local events exist yet.");
                eprintln!("Check that the schedule file exists at the configured URL.");
            }
            Err(err)
        }
    }
}

fn cmd_import(db: &Database, file: &Path) -> Result<()> {
    let imported = exchange::read_from(file)?;
    let count = imported.len();

    // Import is a deliberate restore: it replaces the store instead of
    // merging like the remote sync path does.
    StoreService::new(db).save(&imported)?;
    println!("Imported {} dates from {:?} (previous events replaced).", count, file);

    Ok(())
}

fn cmd_export(db: &Database, file: Option<&Path>) -> Result<()> {
    let store = StoreService::new(db).load()?;
    let path = exchange::write_to(&store, file)?;
    println!("Exported {} dates to {:?}", store.len(), path);
    Ok(())
}

fn cmd_config(db: &Database, command: ConfigCommand) -> Result<()> {
    let service = SettingsService::new(db);
    let mut settings = service.load()?;

    match command {
        ConfigCommand::Show => {
            let first_day = match settings.first_day_of_week {
                FirstDayOfWeek::Monday => "monday",
                FirstDayOfWeek::Sunday => "sunday",
            };
            println!("first-day:          {}", first_day);
            println!("work-hours:         {}", settings.work_hours);
            println!("highlight-weekends: {}", settings.highlight_weekends);
            println!("url:                {}", settings.schedule_url);
        }
        ConfigCommand::FirstDay { value } => {
            service.set_first_day(&mut settings, value)?;
            println!("First day of week changed.");
        }
        ConfigCommand::WorkHours { value } => {
            // Out-of-range values are ignored without a message.
            if service.set_work_hours(&mut settings, value)? {
                println!("Work hours changed to {}.", value);
            }
        }
        ConfigCommand::HighlightWeekends { value } => {
            service.set_highlight_weekends(&mut settings, value)?;
            if value {
                println!("Weekends are now highlighted.");
            } else {
                println!("Weekend highlighting disabled.");
            }
        }
        ConfigCommand::Url { value } => {
            if service.set_schedule_url(&mut settings, &value)? {
                println!("Schedule URL updated to {}", settings.schedule_url);
            }
        }
        ConfigCommand::ResetUrl => {
            service.reset_schedule_url(&mut settings)?;
            println!("Default schedule URL restored.");
        }
    }

    Ok(())
}
