//! Background task bookkeeping for a running gateway.

mod signal;

use orion_error::ErrorOweBase;
use orion_error::prelude::*;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::{RuntimeReason, RuntimeResult};

pub use signal::wait_for_signal;

/// A named group of tasks that stop together.
pub(crate) struct TaskGroup {
    name: &'static str,
    handles: Vec<JoinHandle<anyhow::Result<()>>>,
}

impl TaskGroup {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            handles: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, handle: JoinHandle<anyhow::Result<()>>) {
        self.handles.push(handle);
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    /// Join every task, returning the first failure.
    pub(crate) async fn wait(self) -> RuntimeResult<()> {
        for handle in self.handles {
            handle
                .await
                .map_err(|e| {
                    StructError::from(RuntimeReason::Shutdown)
                        .with_detail(format!("{} task join error: {e}", self.name))
                })?
                .owe(RuntimeReason::Shutdown)?;
        }
        Ok(())
    }
}

/// Tasks started by `Gateway::start` plus the token that stops them.
pub(crate) struct Running {
    cancel: CancellationToken,
    group: TaskGroup,
}

impl Running {
    pub(crate) fn new(cancel: CancellationToken, group: TaskGroup) -> Self {
        Self { cancel, group }
    }

    pub(crate) fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel and join.
    pub(crate) async fn shutdown(self) -> RuntimeResult<()> {
        self.cancel.cancel();
        let name = self.group.name;
        let tasks = self.group.len();
        self.group.wait().await?;
        ws_info!(sys, group = name, tasks, "task group stopped");
        Ok(())
    }
}
