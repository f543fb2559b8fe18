//! Live-suite entry point
//!
//! Drives the login catalogue against a real SUT and browser.
//! Run with: cargo test --package ibank-e2e --test e2e
//!
//! Requires a reachable SUT (or --sut-command) and a local Playwright
//! installation; everything below exit-code plumbing lives in the library.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ibank_e2e::playwright::{BrowserKind, PlaywrightConfig};
use ibank_e2e::runner::{RunnerConfig, ScenarioRunner};
use ibank_e2e::sut::SutConfig;
use ibank_e2e::E2eResult;
use ibank_fixtures::SeedCatalog;

#[derive(Parser, Debug)]
#[command(name = "ibank-e2e")]
#[command(about = "Login-flow E2E suite for the iBank demo application")]
struct Args {
    /// Base URL of a running SUT
    #[arg(long, default_value = "http://localhost:9999")]
    base_url: String,

    /// Command to spawn the SUT; a {port} placeholder gets a free port
    #[arg(long)]
    sut_command: Option<String>,

    /// Seconds to wait for the SUT to come up
    #[arg(long, default_value = "30")]
    startup_timeout: u64,

    /// Run only the scenario with this name
    #[arg(short, long)]
    name: Option<String>,

    /// Browser to use (chromium, firefox, webkit)
    #[arg(long, default_value = "chromium")]
    browser: String,

    /// Run the browser headless
    #[arg(long, default_value = "true")]
    headless: bool,

    /// Seed catalog YAML file (overrides env and defaults)
    #[arg(long)]
    seeds: Option<PathBuf>,

    /// Output directory for the JSON report
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("info".parse().expect("valid directive")),
        )
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    match rt.block_on(run(args)) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

async fn run(args: Args) -> E2eResult<bool> {
    let browser = match args.browser.as_str() {
        "firefox" => BrowserKind::Firefox,
        "webkit" => BrowserKind::Webkit,
        _ => BrowserKind::Chromium,
    };

    let seeds = SeedCatalog::resolve(args.seeds.as_deref())?;

    let config = RunnerConfig {
        sut: SutConfig {
            base_url: args.base_url,
            spawn_command: args.sut_command,
            startup_timeout: Duration::from_secs(args.startup_timeout),
        },
        playwright: PlaywrightConfig {
            browser,
            headless: args.headless,
            ..Default::default()
        },
        seeds,
        output_dir: args.output,
    };

    let mut runner = ScenarioRunner::new(config);

    let results = match args.name {
        Some(name) => runner.run_named(&name).await?,
        None => runner.run_all().await?,
    };

    runner.write_results(&results)?;

    Ok(results.failed == 0)
}
