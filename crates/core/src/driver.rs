// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokio host binding for a mounted demo
//!
//! [`spawn`] moves an [`AnimationController`] into its own task. The task
//! owns the controller outright: commands arrive over an unbounded channel,
//! the tick timer is a `sleep_until` on the scheduler's next deadline, and
//! every change is published on a `watch` channel for the renderer.

use crate::clock::Clock;
use crate::config::DemoConfig;
use crate::demo::{AnimationController, AnimationState};
use crate::error::DemoError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Clock that follows tokio's timer, including paused test time
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> std::time::Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Pause,
    StepForward,
    StepBack,
    Reset,
    Dispose,
}

/// Host-side handle to a demo running in a tokio task
///
/// Dropping the handle without calling [`DemoHandle::dispose`] aborts the task.
#[derive(Debug)]
pub struct DemoHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<AnimationState>,
    task: Option<JoinHandle<()>>,
}

/// Mount a demo in a new task; must be called inside a tokio runtime
pub fn spawn(config: DemoConfig) -> Result<DemoHandle, DemoError> {
    let mut controller = AnimationController::mount(config, TokioClock)?;

    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
    controller.subscribe(move |snapshot: &AnimationState| {
        snapshot_tx.send_replace(*snapshot);
    });

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(controller, command_rx));

    Ok(DemoHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
        task: Some(task),
    })
}

async fn run(
    mut controller: AnimationController<TokioClock>,
    mut commands: mpsc::UnboundedReceiver<Command>,
) {
    loop {
        let deadline = controller.next_deadline();
        let wake_at = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(tokio::time::Instant::now);

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Dispose) | None => break,
                Some(Command::Start) => controller.start(),
                Some(Command::Pause) => controller.pause(),
                Some(Command::StepForward) => controller.step_forward(),
                Some(Command::StepBack) => controller.step_back(),
                Some(Command::Reset) => controller.reset(),
            },
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                controller.poll();
            }
        }
    }

    controller.dispose();
}

impl DemoHandle {
    pub fn start(&self) -> Result<(), DemoError> {
        self.send(Command::Start, "start")
    }

    pub fn pause(&self) -> Result<(), DemoError> {
        self.send(Command::Pause, "pause")
    }

    pub fn step_forward(&self) -> Result<(), DemoError> {
        self.send(Command::StepForward, "step_forward")
    }

    pub fn step_back(&self) -> Result<(), DemoError> {
        self.send(Command::StepBack, "step_back")
    }

    pub fn reset(&self) -> Result<(), DemoError> {
        self.send(Command::Reset, "reset")
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> AnimationState {
        *self.snapshots.borrow()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<AnimationState> {
        self.snapshots.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.task.is_none()
    }

    /// Stop the demo and wait for its task to exit
    ///
    /// Once this returns no tick can fire. Calling it twice is a lifecycle
    /// bug and returns [`DemoError::UseAfterDispose`].
    pub async fn dispose(&mut self) -> Result<(), DemoError> {
        let Some(task) = self.task.take() else {
            return Err(DemoError::UseAfterDispose {
                operation: "dispose",
            });
        };

        // The task may already be gone; awaiting it below is what matters
        let _ = self.commands.send(Command::Dispose);
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "demo task ended abnormally");
        }
        Ok(())
    }

    fn send(&self, command: Command, operation: &'static str) -> Result<(), DemoError> {
        if self.task.is_none() {
            tracing::error!(operation, "demo used after dispose");
            return Err(DemoError::UseAfterDispose { operation });
        }
        self.commands
            .send(command)
            .map_err(|_| DemoError::UseAfterDispose { operation })
    }
}

impl Drop for DemoHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
