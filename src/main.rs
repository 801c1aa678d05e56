mod catalog;
mod cli;
mod error;
mod generate;
mod logging;
mod model;
mod report;
mod scoring;
mod store;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands, ReportFormat};
use crate::error::{Result, ScorecardError};
use crate::report::build_summary;
use crate::report::csv::render_csv;
use crate::report::json::render_scorecard_json;
use crate::report::text::render_scorecard_text;
use crate::store::Store;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_status() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = Catalog::core4();
    let store = Store::open(&cli.store);

    match &cli.command {
        Commands::Init { team } => {
            let record = store.create_survey(team)?;
            println!("{}", record.survey_id);
        }
        Commands::Submit { survey, rate } => {
            let ratings = parse_ratings(rate)?;
            let response = store.insert_response(&catalog, survey, ratings)?;
            println!("response {} recorded", response.response_number);
        }
        Commands::Generate {
            survey,
            count,
            seed,
        } => {
            let mut rng = generate::seeded_rng(*seed);
            for _ in 0..*count {
                let ratings = generate::generate_ratings(&catalog, &mut rng);
                store.insert_response(&catalog, survey, ratings)?;
            }
            info!(survey = %survey, count, "responses generated");
            println!("{count} responses generated");
        }
        Commands::Report {
            survey,
            format,
            out,
        } => {
            let record = store.load_survey(survey)?;
            let summary = build_summary(&catalog, &record)?;
            let rendered = match format {
                ReportFormat::Text => render_scorecard_text(&summary),
                ReportFormat::Json => render_scorecard_json(&summary)?,
            };
            emit(out.as_deref(), &rendered)?;
        }
        Commands::Export { survey, out } => {
            let record = store.load_survey(survey)?;
            let rendered = render_csv(&catalog, &record);
            emit(out.as_deref(), &rendered)?;
        }
        Commands::List => {
            for listing in store.list_surveys()? {
                println!(
                    "{}  {}  {} responses",
                    listing.survey_id, listing.team_name, listing.n_responses
                );
            }
        }
    }

    Ok(())
}

fn emit(out: Option<&Path>, rendered: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn parse_ratings(args: &[String]) -> Result<BTreeMap<String, f64>> {
    let mut ratings = BTreeMap::new();
    for arg in args {
        let (key, value) = parse_rating_arg(arg)?;
        ratings.insert(key, value);
    }
    Ok(ratings)
}

fn parse_rating_arg(arg: &str) -> Result<(String, f64)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| ScorecardError::InvalidRatingArg(arg.to_string()))?;
    if key.is_empty() {
        return Err(ScorecardError::InvalidRatingArg(arg.to_string()));
    }
    let value: f64 = value
        .parse()
        .map_err(|_| ScorecardError::InvalidRatingArg(arg.to_string()))?;
    Ok((key.to_string(), value))
}
