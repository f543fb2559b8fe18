//! Application-under-test lifecycle
//!
//! The login page is served by an external application. The runner either
//! points at an already-running instance and waits until it answers, or
//! spawns it from a configured command line and owns the process for the
//! duration of the run.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{E2eError, E2eResult};

/// Handle to the application under test.
pub struct SutHandle {
    child: Option<Child>,
    base_url: String,
}

impl SutHandle {
    /// Attach to (and optionally spawn) the SUT, then wait until it serves.
    pub async fn acquire(config: SutConfig) -> E2eResult<Self> {
        let mut base_url = config.base_url.clone();

        let child = match &config.spawn_command {
            Some(template) => {
                let command = if template.contains("{port}") {
                    let port = find_free_port();
                    base_url = format!("http://127.0.0.1:{port}");
                    expand_port(template, port)
                } else {
                    template.clone()
                };

                info!("spawning SUT: {}", command);
                let child = Command::new("sh")
                    .arg("-c")
                    .arg(&command)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|e| {
                        E2eError::SutStartup(format!("failed to spawn '{command}': {e}"))
                    })?;
                Some(child)
            }
            None => None,
        };

        let handle = SutHandle { child, base_url };
        handle.wait_until_ready(config.startup_timeout).await?;

        info!("SUT ready at {}", handle.base_url);
        Ok(handle)
    }

    /// Poll the base URL until it answers or the timeout elapses.
    async fn wait_until_ready(&self, timeout: Duration) -> E2eResult<()> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout {
            attempts += 1;

            match client.get(&self.base_url).send().await {
                Ok(resp) if resp.status().is_success() => return Ok(()),
                Ok(resp) => warn!("SUT answered {}", resp.status()),
                Err(e) => {
                    if attempts == 1 {
                        info!("waiting for SUT at {}...", self.base_url);
                    }
                    // Connection refused is expected while the SUT is starting
                    if !e.is_connect() {
                        warn!("readiness check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(200)).await;
        }

        Err(E2eError::SutUnreachable { attempts })
    }

    /// Base URL the suite should drive.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop a spawned SUT. No-op when attached to an external instance.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            info!("stopping SUT (pid {})", child.id());

            // Graceful shutdown first
            #[cfg(unix)]
            {
                use nix::sys::signal::{kill, Signal};
                use nix::unistd::Pid;

                let pid = Pid::from_raw(child.id() as i32);
                if kill(pid, Signal::SIGTERM).is_ok() {
                    std::thread::sleep(Duration::from_millis(500));
                }
            }

            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for SutHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Where and how to reach the application under test.
#[derive(Debug, Clone)]
pub struct SutConfig {
    /// Base URL of an already-running instance.
    pub base_url: String,

    /// Optional command line to spawn the SUT. A `{port}` placeholder is
    /// replaced with a free port and the base URL is rewritten to match.
    pub spawn_command: Option<String>,

    /// How long to keep polling before giving up.
    pub startup_timeout: Duration,
}

impl Default for SutConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9999".to_string(),
            spawn_command: None,
            startup_timeout: Duration::from_secs(30),
        }
    }
}

/// Substitute the port placeholder in a spawn command template.
fn expand_port(template: &str, port: u16) -> String {
    template.replace("{port}", &port.to_string())
}

/// Find a free port to hand to a spawned SUT.
fn find_free_port() -> u16 {
    use std::net::TcpListener;

    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}
