/// Errors returned when a macro trigger can't be completed.
///
/// Out-of-range slots and empty slots are not errors, see [`crate::MacroOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroError {
    /// The definition is longer than the slot, the slot is left untouched
    CapacityExceeded { len: usize, capacity: usize },
    /// The executor refused the macro content
    Executor(ExecutorError),
}

impl From<ExecutorError> for MacroError {
    fn from(e: ExecutorError) -> Self {
        MacroError::Executor(e)
    }
}

/// Errors returned by an [`crate::Executor`] on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExecutorError {
    /// Not enough room left in the command queue, in bytes
    QueueFull { needed: usize, free: usize },
}
