//! report-runner: headless report generator for the orakul engine.
//!
//! Usage:
//!   report-runner --name Piti --dob 1991-02-14 --subject nevedel
//!   report-runner --dob 1991-02-14 --json
//!   report-runner --teaser pack.json --unlock 2 --paid

use anyhow::Result;
use orakul_core::{
    command::{EngineCommand, EngineResponse},
    content::ContentConfig,
    engine::ReportEngine,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let name = string_arg(&args, "--name");
    let dob = string_arg(&args, "--dob").unwrap_or_else(|| "1991-01-01".to_string());
    let paid = args.iter().any(|a| a == "--paid");
    let as_json = args.iter().any(|a| a == "--json");
    let content_path = string_arg(&args, "--content");
    let teaser_path = string_arg(&args, "--teaser");

    // A fresh reading gets a minted id; the same id always reproduces
    // the same reading.
    let subject = string_arg(&args, "--subject")
        .unwrap_or_else(|| format!("r-{}", uuid::Uuid::new_v4()));

    let engine = match content_path {
        Some(path) => ReportEngine::new(
            ContentConfig::load(&path)?,
            Box::new(orakul_core::clock::SystemClock),
        ),
        None => ReportEngine::build(),
    };

    let command = match teaser_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
            EngineCommand::ApplyTeaser {
                pack: serde_json::from_str(&raw)?,
                unlock_count: usize_arg(&args, "--unlock"),
                is_paid: paid,
            }
        }
        None => EngineCommand::GenerateReport {
            name,
            birth_date: dob,
            subject,
            is_paid: paid,
        },
    };

    let response = engine.handle(command)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response {
        EngineResponse::Report { report } => {
            println!("=== REPORT ===");
            println!("  subject:  {}", report.subject);
            println!("  score:    {}", report.score);
            println!("  verdict:  {}", report.verdict);
            println!("  engine:   {}", report.meta.engine_version);
            println!("  computed: {}", report.meta.computed_at);
            for section in &report.facts {
                println!();
                println!("-- {} --", section.title);
                for row in &section.rows {
                    println!("  {}", row.text);
                }
            }
        }
        EngineResponse::Teaser { pack } => {
            println!("{}", serde_json::to_string_pretty(&pack)?);
        }
        EngineResponse::Rejected { code, reason } => {
            log::error!("request rejected: {code}: {reason}");
            eprintln!("rejected [{code}]: {reason}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
