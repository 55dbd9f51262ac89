//! The command loop connects the inbound command channel, the macro dispatcher and the
//! low level command executor.
//!
//! Each iteration runs one command. Commands injected by a played macro always go first, so a
//! macro runs to completion before any line which was waiting in the channel.

use embassy_sync::channel::Receiver;

use crate::channel::CommandLine;
use crate::dispatcher::MacroDispatcher;
use crate::executor::{CommandQueue, DiagnosticSink, LogDiagnostics};
use crate::trigger::Trigger;
use crate::{COMMAND_CHANNEL_SIZE, RawMutex};

/// The trait for low level command executors.
///
/// This is where a single machine command, e.g. `M300 S1567 P206`, actually runs.
pub trait CommandSink {
    /// Run one command line to completion
    async fn execute(&mut self, command: &str);
}

/// Single execution context owning the [`MacroDispatcher`].
///
/// # Example
/// ```rust
/// use gcode_music::channel::COMMAND_CHANNEL;
/// use gcode_music::{CommandLoop, CommandSink, LogDiagnostics, MacroDispatcher};
///
/// struct Buzzer;
///
/// impl CommandSink for Buzzer {
///     async fn execute(&mut self, command: &str) {
///         // Parse `M300` and drive the buzzer
///     }
/// }
///
/// let mut command_loop = CommandLoop::new(
///     MacroDispatcher::default(),
///     LogDiagnostics,
///     Buzzer,
///     COMMAND_CHANNEL.receiver(),
/// );
/// command_loop.run().await;
/// ```
pub struct CommandLoop<'a, S: CommandSink, D: DiagnosticSink = LogDiagnostics, const N: usize = { COMMAND_CHANNEL_SIZE }>
{
    dispatcher: MacroDispatcher,
    injected: CommandQueue,
    diagnostics: D,
    sink: S,
    receiver: Receiver<'a, RawMutex, CommandLine, N>,
}

impl<'a, S: CommandSink, D: DiagnosticSink, const N: usize> CommandLoop<'a, S, D, N> {
    pub fn new(
        dispatcher: MacroDispatcher,
        diagnostics: D,
        sink: S,
        receiver: Receiver<'a, RawMutex, CommandLine, N>,
    ) -> Self {
        Self {
            dispatcher,
            injected: CommandQueue::new(),
            diagnostics,
            sink,
            receiver,
        }
    }

    pub fn dispatcher(&self) -> &MacroDispatcher {
        &self.dispatcher
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of injected commands waiting to run
    pub fn pending(&self) -> usize {
        self.injected.len()
    }

    /// Drop all injected commands, e.g. after an emergency stop
    pub fn clear_pending(&mut self) {
        self.injected.clear();
    }

    pub async fn run(&mut self) {
        loop {
            self.process_next().await;
        }
    }

    /// Run one command, waiting for input if nothing is injected
    pub async fn process_next(&mut self) {
        if let Some(command) = self.injected.pop() {
            self.run_injected(&command).await;
        } else {
            let line = self.receiver.receive().await;
            self.process_line(&line).await;
        }
    }

    /// Run one inbound command line: macro codes go to the dispatcher, everything else to the
    /// command sink.
    pub async fn process_line(&mut self, line: &str) {
        if let Some(trigger) = Trigger::parse(line) {
            if let Some(result) = self
                .dispatcher
                .handle_trigger(&trigger, &mut self.injected, &mut self.diagnostics)
            {
                if let Err(e) = result {
                    debug!("M{} failed: {:?}", trigger.code, e);
                }
                return;
            }
        }
        self.sink.execute(line).await;
    }

    async fn run_injected(&mut self, command: &str) {
        // Macros can't call other macros
        if Trigger::parse(command).is_some_and(|trigger| self.dispatcher.select(trigger.code).is_some()) {
            warn!("Nested macro call skipped: {}", command);
            return;
        }
        trace!("Injected: {}", command);
        self.sink.execute(command).await;
    }
}
