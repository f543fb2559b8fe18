//! Playwright driver layer
//!
//! Each scenario becomes one self-contained script: launch the browser, run
//! the steps, print a one-line JSON verdict on stdout, and always clear
//! session state before the browser closes. The script runs under `node`
//! against the locally installed Playwright package, so the whole scenario
//! lives in a single browser session.

use std::fmt::Write as _;
use std::process::{Command, Stdio};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::process::Command as TokioCommand;
use tracing::debug;

use crate::error::{E2eError, E2eResult};
use crate::step::Step;

/// Browser engine to drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    pub base_url: String,
    pub browser: BrowserKind,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9999".to_string(),
            browser: BrowserKind::Chromium,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// Verdict line printed by a generated script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub ok: bool,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub locator: Option<String>,
    #[serde(default)]
    pub expected: Option<String>,
}

/// Handle to the Playwright installation.
pub struct PlaywrightHandle {
    config: PlaywrightConfig,
}

impl PlaywrightHandle {
    pub fn new(config: PlaywrightConfig) -> E2eResult<Self> {
        Self::check_installed()?;
        Ok(Self { config })
    }

    /// Verify `node` can resolve the playwright package from here.
    fn check_installed() -> E2eResult<()> {
        let status = Command::new("node")
            .args(["-e", "require('playwright')"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Execute a scenario's steps in one browser session.
    pub async fn run_steps(&self, steps: &[Step]) -> E2eResult<()> {
        let script = self.build_script(steps);
        let verdict = self.run_script(&script).await?;
        if verdict.ok {
            Ok(())
        } else {
            Err(verdict_error(verdict))
        }
    }

    /// Compile steps into a standalone driver script.
    pub fn build_script(&self, steps: &[Step]) -> String {
        let mut script = String::new();

        let _ = write!(
            script,
            r#"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const context = await browser.newContext({{
    viewport: {{ width: {width}, height: {height} }}
  }});
  const page = await context.newPage();
  const baseUrl = {base_url};
  let phase = 'arrange';
  let step = 'launch';
  let expected = null;

  try {{
"#,
            browser = self.config.browser.as_str(),
            headless = self.config.headless,
            width = self.config.viewport_width,
            height = self.config.viewport_height,
            base_url = js_str(&self.config.base_url),
        );

        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(script, "\n    // step {}: {}", i + 1, step.label());
            script.push_str(&self.step_js(step));
        }

        script.push_str(
            r#"
    console.log(JSON.stringify({ ok: true }));
  } catch (error) {
    const verdict = { ok: false, phase, step, error: String((error && error.message) || error) };
    if (phase === 'assert' && expected) {
      verdict.locator = expected.locator;
      verdict.expected = expected.text;
    }
    console.log(JSON.stringify(verdict));
  } finally {
    // No scenario may leak session state into the next.
    try {
      await context.clearCookies();
      await page.evaluate(() => { localStorage.clear(); });
    } catch (cleanupError) {
      console.error('teardown: ' + cleanupError);
    }
    await browser.close();
  }
})();
"#,
        );

        script
    }

    /// Convert a step to script code.
    fn step_js(&self, step: &Step) -> String {
        let label = js_str(&step.label());
        match step {
            Step::Navigate { url } => format!(
                "    phase = 'arrange';\n    step = {label};\n    await page.goto(baseUrl + {url});\n",
                url = js_str(url),
            ),
            Step::Fill { locator, value } => format!(
                "    phase = 'act';\n    step = {label};\n    await page.locator({locator}).first().fill({value});\n",
                locator = js_str(&format!("xpath={locator}")),
                value = js_str(value),
            ),
            Step::Click { locator } => format!(
                "    phase = 'act';\n    step = {label};\n    await page.locator({locator}).first().click();\n",
                locator = js_str(&format!("xpath={locator}")),
            ),
            Step::ExpectText {
                locator,
                text,
                timeout_ms,
            } => format!(
                concat!(
                    "    phase = 'assert';\n",
                    "    step = {label};\n",
                    "    expected = {{ locator: {locator}, text: {text} }};\n",
                    "    await page.waitForFunction(([xp, needle]) => {{\n",
                    "      const node = document.evaluate(xp, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue;\n",
                    "      return !!node && (node.textContent || '').includes(needle);\n",
                    "    }}, [{locator}, {text}], {{ timeout: {timeout} }});\n",
                ),
                label = label,
                locator = js_str(locator),
                text = js_str(text),
                timeout = timeout_ms,
            ),
        }
    }

    /// Run a compiled script under node and parse its verdict.
    pub async fn run_script(&self, script: &str) -> E2eResult<Verdict> {
        let dir = tempfile::tempdir()?;
        let script_path = dir.path().join("scenario.js");
        std::fs::write(&script_path, script)?;

        debug!("running driver script {}", script_path.display());

        let output = TokioCommand::new("node").arg(&script_path).output().await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if let Some(verdict) = parse_verdict(&stdout) {
            return Ok(verdict);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(E2eError::Driver {
            step: "node".to_string(),
            reason: format!(
                "no verdict in driver output (exit: {:?})\nstdout: {}\nstderr: {}",
                output.status.code(),
                stdout,
                stderr
            ),
        })
    }
}

/// JS string literal with full escaping, including the Cyrillic assertion
/// texts and any quotes inside generated credentials.
fn js_str(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Extract the last verdict line from mixed driver output.
fn parse_verdict(stdout: &str) -> Option<Verdict> {
    let line_re = Regex::new(r#"^\{.*"ok".*\}$"#).ok()?;
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .filter(|line| line_re.is_match(line))
        .find_map(|line| serde_json::from_str(line).ok())
}

/// Map a failed verdict into the error taxonomy: assert-phase failures are
/// assertion timeouts, everything else is driver/environment trouble.
fn verdict_error(verdict: Verdict) -> E2eError {
    if verdict.phase.as_deref() == Some("assert") {
        E2eError::AssertionTimeout {
            locator: verdict.locator.unwrap_or_default(),
            expected: verdict.expected.unwrap_or_default(),
        }
    } else {
        E2eError::Driver {
            step: verdict.step.unwrap_or_else(|| "unknown".to_string()),
            reason: verdict
                .error
                .unwrap_or_else(|| "unknown driver failure".to_string()),
        }
    }
}
