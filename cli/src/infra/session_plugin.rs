//! Infrastructure implementation of the `SessionPlugin` port.

use std::process::ExitStatus;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

use crate::application::ports::{CommandRunner, SessionPlugin};
use crate::domain::exec::{PluginInvocation, SESSION_MANAGER_PLUGIN};

/// Runs AWS's `session-manager-plugin` binary through a `CommandRunner`.
pub struct SessionManagerPlugin<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SessionManagerPlugin<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> SessionPlugin for SessionManagerPlugin<R> {
    async fn is_installed(&self) -> bool {
        self.runner
            .run(SESSION_MANAGER_PLUGIN, &["--version"])
            .await
            .is_ok()
    }

    async fn start_session(&self, invocation: &PluginInvocation) -> Result<ExitStatus> {
        let args = invocation.args()?;
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        // Ctrl-C belongs to the remote shell while the session is attached.
        // The handler is installed here, before the plugin is spawned.
        let interrupt_guard = swallow_interrupts()?;

        let status = self.runner.run_status(SESSION_MANAGER_PLUGIN, &arg_refs).await;
        interrupt_guard.abort();

        status.with_context(|| format!("running {SESSION_MANAGER_PLUGIN}"))
    }
}

/// Registers a SIGINT listener and drains it on a background task.
#[cfg(unix)]
fn swallow_interrupts() -> Result<JoinHandle<()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupts =
        signal(SignalKind::interrupt()).context("cannot install interrupt handler")?;
    Ok(tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            tracing::debug!("interrupt forwarded to remote session");
        }
    }))
}

#[cfg(windows)]
fn swallow_interrupts() -> Result<JoinHandle<()>> {
    let mut interrupts =
        tokio::signal::windows::ctrl_c().context("cannot install interrupt handler")?;
    Ok(tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            tracing::debug!("interrupt forwarded to remote session");
        }
    }))
}
