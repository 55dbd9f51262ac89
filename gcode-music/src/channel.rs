//! Exposed channels which carry command lines into the [`crate::CommandLoop`]

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};
use heapless::String;

use crate::{COMMAND_CHANNEL_SIZE, COMMAND_LINE_SIZE, RawMutex};

/// A single inbound command line
pub type CommandLine = String<COMMAND_LINE_SIZE>;

/// Channel for inbound command lines, read by the command loop
pub static COMMAND_CHANNEL: Channel<RawMutex, CommandLine, COMMAND_CHANNEL_SIZE> = Channel::new();

/// Copy `line` into a [`CommandLine`], `None` if it's longer than `COMMAND_LINE_SIZE`
pub fn command_line(line: &str) -> Option<CommandLine> {
    String::try_from(line).ok()
}

/// Send a command line to [`COMMAND_CHANNEL`], waiting for room.
///
/// Returns `false` and drops the line if it's too long.
pub async fn send_command(line: &str) -> bool {
    match command_line(line) {
        Some(line) => {
            COMMAND_CHANNEL.send(line).await;
            true
        }
        None => {
            warn!("Command line of {} bytes dropped", line.len());
            false
        }
    }
}
