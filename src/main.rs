use anyhow::Result;
use clap::Parser;
use log::debug;
use std::fs;

use ads_validator::cli::{Cli, Command};
use ads_validator::config::Config;
use ads_validator::currency::{currency_to_micros, micros_to_currency};
use ads_validator::models::{payload_from_str, ValidationResult};
use ads_validator::quota::validate_quota_remaining;
use ads_validator::validation::{validate_campaign_update, validate_keyword_update};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load configuration from {:?}: {}", path, e);
                return Err(anyhow::anyhow!("Configuration loading failed: {}", e));
            }
        },
        None => Config::default(),
    };
    debug!("daily quota limit: {}", config.quota.daily_limit);

    match cli.command {
        Command::Campaign { file } => {
            let raw = fs::read_to_string(&file)?;
            let result = validate_campaign_update(&payload_from_str(&raw)?);
            print_result("Campaign", &result, cli.json)?;
        }
        Command::Keyword { file } => {
            let raw = fs::read_to_string(&file)?;
            let result = validate_keyword_update(&payload_from_str(&raw)?);
            print_result("Keyword", &result, cli.json)?;
        }
        Command::Quota { cost, used, limit } => {
            let daily_limit = limit.unwrap_or(config.quota.daily_limit);
            let snapshot = validate_quota_remaining(cost, daily_limit, used);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!(
                    "Quota: {:.2}% used, {} of {} remaining",
                    snapshot.percent_used, snapshot.remaining, daily_limit
                );
                println!(
                    "critical: {}, throttle: {}, can proceed with cost {}: {}",
                    snapshot.is_critical, snapshot.should_throttle, cost, snapshot.can_proceed
                );
            }
        }
        Command::Convert { amount, micros } => {
            if let Some(amount) = amount {
                println!("{} = {} micros", amount, currency_to_micros(amount));
            } else if let Some(micros) = micros {
                println!("{} micros = {}", micros, micros_to_currency(micros));
            } else {
                anyhow::bail!("provide --amount or --micros");
            }
        }
    }

    Ok(())
}

fn print_result(kind: &str, result: &ValidationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if result.is_valid {
        println!("{} update is valid", kind);
    } else {
        println!("{} update is invalid:", kind);
        for error in &result.errors {
            println!("  - {}", error);
        }
    }
    for warning in &result.warnings {
        println!("  warning: {}", warning);
    }

    Ok(())
}
