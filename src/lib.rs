pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod scoring;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;

use crate::api::models::{ScoreMatchRequest, ScoreMatchResponse};
use crate::cli::Command;
use crate::config::settings::{AppConfig, ScoringSettings};
use crate::services::scoring::MatchScoringService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_score(input: &str, pretty: bool) -> Result<()> {
    let raw = read_input(input)?;
    let request: ScoreMatchRequest = serde_json::from_str(&raw)?;
    let outcome = request.into_match_outcome()?;

    let service = MatchScoringService::new(AppConfig::new());
    let report = service.score_match(&outcome)?;
    let response = ScoreMatchResponse::from(report);

    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");
    Ok(())
}

pub fn handle_multipliers() -> Result<()> {
    let config = AppConfig::new();
    print_multiplier_tables(&config.scoring);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn print_multiplier_tables(settings: &ScoringSettings) {
    println!("{}", "Ranking points (System B)".bold());
    println!("  win base:              {}", settings.base_win_points);
    println!("  loss base:             {}", settings.base_loss_points);
    println!("  tournament multiplier: x{}", settings.tournament_multiplier);
    println!();
    println!(
        "{}",
        format!("Development bonuses (below {} points)", settings.elite_threshold).bold()
    );
    println!("  female:     x{}", settings.female_development_bonus);
    println!("  mixed team: x{}", settings.mixed_team_development_bonus);
    println!();
    println!("{}", "Age multipliers".bold());
    for (bracket, factor) in settings.age_multipliers.as_table() {
        println!("  {:<4} x{}", bracket, factor);
    }
    println!();
    println!("{}", "Pickle points".bold());
    println!("  conversion rate: x{}", settings.pickle_conversion_rate);
    println!("  winner bonus:    +{}", settings.winner_pickle_bonus);
}
