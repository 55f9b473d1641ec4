pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod records;
pub mod scoring;
pub mod services;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::EventStore;
use crate::domain::Gender;
use crate::services::import::ImportService;
use crate::services::report::{ReportFilter, ReportService};
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

pub fn handle_import(path: &Path) -> Result<()> {
    let config = AppConfig::new();
    let store = EventStore::open(&config.store.database_path)?;
    let summary = ImportService::new(store).run(path)?;

    println!(
        "{} {} of {} rows ({} skipped)",
        "Imported".green().bold(),
        summary.imported,
        summary.read,
        summary.skipped
    );
    Ok(())
}

pub fn handle_report(month: Option<&str>, gender: Option<&str>) -> Result<()> {
    let gender = gender
        .map(|g| g.parse::<Gender>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let filter = ReportFilter {
        month: month.map(str::to_string),
        gender,
    };

    let config = AppConfig::new();
    let store = EventStore::open(&config.store.database_path)?;
    ReportService::new(store, config).run(&filter)
}

pub fn handle_reset() -> Result<()> {
    let config = AppConfig::new();
    let store = EventStore::open(&config.store.database_path)?;
    store.reset()?;

    println!("{} {}", "Reset".green().bold(), config.store.database_path);
    Ok(())
}
