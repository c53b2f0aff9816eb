// src/bin/seed.rs
// DOCUMENTATION: One-shot demo content loader
// PURPOSE: Seed empty gallery and testimonial tables; run manually, never on server start

use dotenv::dotenv;
use std::process;
use studio_gateway::config::{self, Config};
use studio_gateway::services::{SeedLoader, SeedOutcome, SeedReport};

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn print_header() {
    println!("{}╔══════════════════════════════════════════════════════════════╗{}", CYAN, RESET);
    println!("{}║   🚀 Studio Gateway - Seeding demo content                    ║{}", CYAN, RESET);
    println!("{}╚══════════════════════════════════════════════════════════════╝{}", CYAN, RESET);
}

fn print_connection_help(message: &str) {
    eprintln!("\n{}❌ Seeding failed: {}{}", RED, message, RESET);
    eprintln!("\nMake sure:");
    eprintln!("  1. The database tables exist (gallery, testimonials)");
    eprintln!("  2. Your .env file has correct credentials:");
    eprintln!("     - SUPABASE_URL");
    eprintln!("     - SUPABASE_SERVICE_ROLE_KEY (or SUPABASE_ANON_KEY)");
    eprintln!("  3. The hosted project is active");
}

fn print_summary(reports: &[SeedReport]) {
    println!("\n{}📋 Seeding Summary{}", BOLD, RESET);
    println!("──────────────────────────────────────────────────────────────");
    println!("{:<24} {:<32} {:>8}", "Table", "Result", "Duration");
    println!("──────────────────────────────────────────────────────────────");

    for report in reports {
        let (color, result) = match &report.outcome {
            SeedOutcome::Inserted(count) => (GREEN, format!("✅ {} rows inserted", count)),
            SeedOutcome::Skipped => (YELLOW, "⚠️  skipped (table not empty)".to_string()),
            SeedOutcome::NothingToSeed => (YELLOW, "⚠️  no source records".to_string()),
            SeedOutcome::Failed(message) => (RED, format!("❌ {}", message)),
        };
        println!(
            "{:<24} {}{:<32}{} {:>7.2}s",
            report.table.as_str(),
            color,
            result,
            RESET,
            report.duration_secs
        );
    }
    println!("──────────────────────────────────────────────────────────────");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = Config::from_env();
    if config.supabase_url.trim().is_empty() || config.seed_key().trim().is_empty() {
        eprintln!("{}❌ Error: store credentials not found{}", RED, RESET);
        eprintln!("Set SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY (or SUPABASE_ANON_KEY) in .env");
        process::exit(1);
    }

    print_header();

    let store = config::init_store(&config, config.seed_key())?;
    let loader = SeedLoader::new(&store);

    println!("\n{}🔍 Checking store connection...{}", CYAN, RESET);
    if let Err(e) = loader.check_connection().await {
        print_connection_help(&e.message);
        process::exit(1);
    }
    println!("{}✅ Connected{}\n", GREEN, RESET);

    let reports = loader.run().await;
    print_summary(&reports);

    if reports.iter().any(|r| r.outcome.is_failure()) {
        println!("\n{}⚠️  Seeding finished with errors{}", YELLOW, RESET);
        process::exit(1);
    }

    println!("\n{}✨ Seeding completed!{}", GREEN, RESET);
    println!("To re-seed a table, clear it in the database dashboard first.");
    Ok(())
}
