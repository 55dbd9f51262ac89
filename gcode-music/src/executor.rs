//! Collaborators of the dispatcher: where played macros go, and where diagnostics go.

use heapless::String;

use crate::INJECTED_BUFFER_SIZE;
use crate::error::ExecutorError;
use crate::slot::COMMAND_SEPARATOR;

/// Runs command sequences submitted by the dispatcher.
///
/// `submit` must return immediately. The submitted lines are run later, one by one, ahead of
/// any input which was already waiting.
pub trait Executor {
    /// Queue a multi-line command sequence
    fn submit(&mut self, commands: &str) -> Result<(), ExecutorError>;
}

/// Receives operator-visible diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// Diagnostic sink which writes to the error log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&mut self, message: &str) {
        error!("{}", message);
    }
}

/// Queue of injected commands, always drained before new input is read.
///
/// Pending commands are kept as one text buffer of `SIZE` bytes, every command terminated by
/// `\n`, plus a read cursor. A submitted sequence is inserted at the front, so it runs in
/// order and before anything which was pending, including the rest of a previously
/// submitted sequence. A sequence of `n` bytes always fits into an empty queue when
/// `n < SIZE`.
pub struct CommandQueue<const SIZE: usize = { INJECTED_BUFFER_SIZE }> {
    buffer: String<SIZE>,
    cursor: usize,
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    fn pending_text(&self) -> &str {
        self.buffer.get(self.cursor..).unwrap_or_default()
    }

    /// Take the next pending command
    pub fn pop(&mut self) -> Option<String<SIZE>> {
        let rest = self.pending_text();
        let end = rest.find(COMMAND_SEPARATOR)?;
        let command = String::try_from(&rest[..end]).ok()?;
        self.cursor += end + 1;
        if self.cursor >= self.buffer.len() {
            self.clear();
        }
        Some(command)
    }

    /// Number of pending commands
    pub fn len(&self) -> usize {
        self.pending_text().matches(COMMAND_SEPARATOR).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending_text().is_empty()
    }

    /// Free bytes
    pub fn free(&self) -> usize {
        SIZE - self.pending_text().len()
    }

    /// Drop all pending commands
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Non-blank lines of a command sequence, surrounding whitespace removed
fn sub_commands(commands: &str) -> impl Iterator<Item = &str> {
    commands.lines().map(str::trim).filter(|line| !line.is_empty())
}

impl<const SIZE: usize> Executor for CommandQueue<SIZE> {
    fn submit(&mut self, commands: &str) -> Result<(), ExecutorError> {
        // Check the room first, a sequence is queued completely or not at all
        let needed: usize = sub_commands(commands).map(|line| line.len() + 1).sum();
        let free = self.free();
        if needed > free {
            return Err(ExecutorError::QueueFull { needed, free });
        }

        let full = ExecutorError::QueueFull { needed, free };
        let mut buffer: String<SIZE> = String::new();
        for line in sub_commands(commands) {
            buffer.push_str(line).map_err(|_| full)?;
            buffer.push(COMMAND_SEPARATOR).map_err(|_| full)?;
        }
        buffer.push_str(self.pending_text()).map_err(|_| full)?;
        self.buffer = buffer;
        self.cursor = 0;
        debug!("Injected {} bytes, {} commands pending", needed, self.len());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain<const SIZE: usize>(queue: &mut CommandQueue<SIZE>) -> std::vec::Vec<std::string::String> {
        core::iter::from_fn(|| queue.pop()).map(|s| s.as_str().into()).collect()
    }

    #[test]
    fn test_submit_keeps_order() {
        let mut queue: CommandQueue<64> = CommandQueue::new();
        queue.submit("M300 S100 P50\nM300 S200 P50").unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(drain(&mut queue), ["M300 S100 P50", "M300 S200 P50"]);
        assert!(queue.is_empty());
        assert_eq!(queue.free(), 64);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let mut queue: CommandQueue<64> = CommandQueue::new();
        queue.submit("\nM300 S1\r\n  \n M300 S2 \n").unwrap();
        assert_eq!(drain(&mut queue), ["M300 S1", "M300 S2"]);
    }

    #[test]
    fn test_later_submit_runs_first() {
        let mut queue: CommandQueue<64> = CommandQueue::new();
        queue.submit("A1\nA2\nA3").unwrap();
        assert_eq!(queue.pop().unwrap().as_str(), "A1");
        queue.submit("B1\nB2").unwrap();
        assert_eq!(drain(&mut queue), ["B1", "B2", "A2", "A3"]);
    }

    #[test]
    fn test_queue_full_is_all_or_nothing() {
        let mut queue: CommandQueue<8> = CommandQueue::new();
        queue.submit("A1\nA2").unwrap();
        assert_eq!(queue.free(), 2);
        assert_eq!(
            queue.submit("B1\nB2"),
            Err(ExecutorError::QueueFull { needed: 6, free: 2 })
        );
        assert_eq!(drain(&mut queue), ["A1", "A2"]);
    }

    #[test]
    fn test_longest_slot_content_fits() {
        // 651 bytes, 326 one-letter commands: the worst case for a 651 byte slot
        let content = format!("{}M", "M\n".repeat(325));
        assert_eq!(content.len(), 651);
        let mut queue: CommandQueue<652> = CommandQueue::new();
        queue.submit(&content).unwrap();
        assert_eq!(queue.len(), 326);
        assert_eq!(queue.free(), 0);

        // One long command is fine as well
        let mut queue: CommandQueue<652> = CommandQueue::new();
        let long = format!("M117 {}", "x".repeat(646));
        queue.submit(&long).unwrap();
        assert_eq!(queue.pop().unwrap().as_str(), long);
    }

    #[test]
    fn test_clear() {
        let mut queue: CommandQueue<16> = CommandQueue::new();
        queue.submit("A1\nA2").unwrap();
        queue.clear();
        assert!(queue.pop().is_none());
        assert_eq!(queue.len(), 0);
    }
}
