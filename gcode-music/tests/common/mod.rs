use embassy_sync::channel::Channel;
use gcode_music::channel::{CommandLine, command_line};
use gcode_music::{CommandLoop, CommandSink, DiagnosticSink, ExecutorError, Executor, RawMutex};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub type TestChannel = Channel<RawMutex, CommandLine, 8>;

/// Records every command sequence it's asked to run
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub submitted: Vec<String>,
}

impl Executor for RecordingExecutor {
    fn submit(&mut self, commands: &str) -> Result<(), ExecutorError> {
        self.submitted.push(commands.to_string());
        Ok(())
    }
}

/// Records every diagnostic
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub reports: Vec<String>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&mut self, message: &str) {
        self.reports.push(message.to_string());
    }
}

/// Records every command which reaches the machine
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub executed: Vec<String>,
}

impl CommandSink for RecordingSink {
    async fn execute(&mut self, command: &str) {
        self.executed.push(command.to_string());
    }
}

pub fn send_lines(channel: &TestChannel, lines: &[&str]) {
    for line in lines {
        let line = command_line(line).expect("line too long for the test channel");
        channel.try_send(line).expect("test channel full");
    }
}

/// Run the command loop until the channel and the injected queue are both empty
pub fn drain<const N: usize>(
    command_loop: &mut CommandLoop<'_, RecordingSink, RecordingDiagnostics, N>,
    channel: &Channel<RawMutex, CommandLine, N>,
) {
    embassy_futures::block_on(async {
        while command_loop.pending() > 0 || !channel.is_empty() {
            command_loop.process_next().await;
        }
    });
}
