//! Scenario orchestration
//!
//! Resolves each catalogue row, drives it through the browser, and accounts
//! for the results. Rows are failure-isolated: whatever goes wrong inside
//! one is recorded on that row and the loop moves on to the next.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use ibank_fixtures::SeedCatalog;

use crate::error::{E2eError, E2eResult};
use crate::playwright::{PlaywrightConfig, PlaywrightHandle};
use crate::scenario::{self, Scenario};
use crate::sut::{SutConfig, SutHandle};

/// Result of one catalogue row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
    /// True when the failure looks like environment trouble rather than a
    /// product defect.
    pub environment_failure: bool,
}

/// Aggregate over a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Drives the catalogue against one SUT instance.
pub struct ScenarioRunner {
    sut_config: SutConfig,
    playwright_config: PlaywrightConfig,
    seeds: SeedCatalog,
    output_dir: PathBuf,
    sut: Option<SutHandle>,
}

impl ScenarioRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            sut_config: config.sut,
            playwright_config: config.playwright,
            seeds: config.seeds,
            output_dir: config.output_dir,
            sut: None,
        }
    }

    /// Acquire the SUT and point the driver at it.
    pub async fn start(&mut self) -> E2eResult<()> {
        if self.sut.is_some() {
            return Ok(());
        }

        let sut = SutHandle::acquire(self.sut_config.clone()).await?;
        self.playwright_config.base_url = sut.base_url().to_string();
        self.sut = Some(sut);
        Ok(())
    }

    /// Run the full catalogue.
    pub async fn run_all(&mut self) -> E2eResult<SuiteResult> {
        let rows = scenario::catalogue();
        self.run_rows(&rows).await
    }

    /// Run a single row by name.
    pub async fn run_named(&mut self, name: &str) -> E2eResult<SuiteResult> {
        let rows: Vec<Scenario> = scenario::catalogue()
            .into_iter()
            .filter(|s| s.name == name)
            .collect();

        if rows.is_empty() {
            return Err(E2eError::UnknownScenario(name.to_string()));
        }
        self.run_rows(&rows).await
    }

    async fn run_rows(&mut self, rows: &[Scenario]) -> E2eResult<SuiteResult> {
        self.start().await?;
        let driver = PlaywrightHandle::new(self.playwright_config.clone())?;

        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        info!("running {} scenario(s)", rows.len());

        for row in rows {
            let result = self.run_row(&driver, row).await;
            if result.passed {
                passed += 1;
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                failed += 1;
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "suite: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(SuiteResult {
            total: rows.len(),
            passed,
            failed,
            duration_ms,
            results,
        })
    }

    async fn run_row(&self, driver: &PlaywrightHandle, row: &Scenario) -> ScenarioResult {
        let start = Instant::now();
        debug!("scenario {}: {}", row.name, row.description);

        let outcome = match row.resolve(&self.seeds) {
            Ok(resolved) => driver.run_steps(&resolved.steps()).await,
            Err(e) => Err(e),
        };

        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(()) => ScenarioResult {
                name: row.name.to_string(),
                passed: true,
                duration_ms,
                error: None,
                environment_failure: false,
            },
            Err(e) => ScenarioResult {
                name: row.name.to_string(),
                passed: false,
                duration_ms,
                environment_failure: e.is_environment(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Write the suite report as JSON.
    pub fn write_results(&self, results: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("suite-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("results written to {}", path.display());
        Ok(path)
    }

    /// Release a spawned SUT early. Drop does the same.
    pub fn stop(&mut self) {
        if let Some(mut sut) = self.sut.take() {
            sut.stop();
        }
    }
}

impl Drop for ScenarioRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Configuration for the runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub sut: SutConfig,
    pub playwright: PlaywrightConfig,
    pub seeds: SeedCatalog,
    pub output_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            sut: SutConfig::default(),
            playwright: PlaywrightConfig::default(),
            seeds: SeedCatalog::default(),
            output_dir: PathBuf::from("test-results"),
        }
    }
}
