mod report;

use anyhow::{Context, bail};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use ordo::{Calendar, CalendarConfig, CalendarError, Locale, Options, RunMetrics, generate_with_metrics};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// Liturgical calendar of the Roman Rite for one year.
///
/// Exit codes: 0 success, 1 internal error, 2 invalid arguments.
#[derive(Parser, Debug)]
#[command(name = "ordo", version, about)]
struct Cli {
    /// Civil year, or liturgical year with --liturgical-year.
    year: i32,

    /// Calendar locale: es or la.
    #[arg(long, short, default_value = "es", value_parser = parse_locale)]
    locale: Locale,

    /// Show the liturgical year ending in YEAR (from Advent of YEAR-1).
    #[arg(long)]
    liturgical_year: bool,

    /// Show a single date (YYYY-MM-DD) of the requested year.
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// TOML file with calendar settings, overriding the locale's own.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Print per-stage timings after the report.
    #[arg(long)]
    timings: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

fn parse_locale(value: &str) -> Result<Locale, CalendarError> {
    value.parse()
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD)"))
}

/// Validated request: everything the user got wrong is reported before generation.
struct Request {
    options: Options,
    color: bool,
}

impl Request {
    fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = cli.config.as_deref().map(load_config).transpose()?;
        if let Some(date) = cli.date {
            let inside = if cli.liturgical_year {
                ordo::liturgical_year_bounds(cli.year).is_some_and(|bounds| bounds.contains(date))
            } else {
                date.year() == cli.year
            };
            if !inside {
                bail!("--date {date} is outside the requested year {}", cli.year);
            }
        }
        let color = if cli.no_color {
            false
        } else {
            cli.color || io::stdout().is_terminal()
        };
        Ok(Request { options: Options { config }, color })
    }
}

fn load_config(path: &std::path::Path) -> anyhow::Result<CalendarConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid calendar config in {}", path.display()))
}

fn generate(cli: &Cli, options: &Options) -> anyhow::Result<(Calendar, Vec<RunMetrics>)> {
    if !cli.liturgical_year {
        let run = generate_with_metrics(cli.year, cli.locale, options)?;
        return Ok((run.calendar, vec![run.metrics]));
    }
    let previous = generate_with_metrics(cli.year - 1, cli.locale, options)?;
    let current = generate_with_metrics(cli.year, cli.locale, options)?;
    let calendar = Calendar::liturgical_year(cli.year, [&previous.calendar, &current.calendar]);
    Ok((calendar, vec![previous.metrics, current.metrics]))
}

fn run(cli: &Cli, request: &Request) -> anyhow::Result<()> {
    let (calendar, metrics) = generate(cli, &request.options)?;
    log::debug!("generated {} days for {} ({})", calendar.len(), cli.year, cli.locale);
    let metrics = if cli.timings { metrics } else { Vec::new() };

    if let Some(date) = cli.date {
        let day = calendar.get_date(date).with_context(|| format!("no resolved day for {date}"))?;
        if cli.json {
            print_json(day)?;
        } else {
            report::print_single_day(day, request.color);
        }
        return Ok(());
    }

    if cli.json {
        print_json(&calendar)
    } else {
        let kind = if cli.liturgical_year { "Liturgical year" } else { "Year" };
        let heading = format!("{kind} {} · {}", cli.year, cli.locale);
        report::print_calendar(&heading, &calendar, &metrics, request.color);
        Ok(())
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to write JSON")?;
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let request = match Request::from_cli(&cli) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&cli, &request) {
        eprintln!("error: {err:#}");
        let code = if err.downcast_ref::<CalendarError>().is_some() { 2 } else { 1 };
        std::process::exit(code);
    }
}
