use heapless::String;

use crate::error::MacroError;

/// Separates sub-commands in the on-the-wire form of a macro
pub const MACRO_DELIMITER: char = '|';

/// Separates sub-commands in the stored form of a macro
pub const COMMAND_SEPARATOR: char = '\n';

/// A single macro slot.
///
/// The content is stored already translated, so it's directly a multi-line command sequence.
/// Capacity is fixed at compile time, an empty slot is an undefined slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot<const L: usize> {
    content: String<L>,
}

impl<const L: usize> Slot<L> {
    pub const fn new() -> Self {
        Self { content: String::new() }
    }

    /// Maximum content length in bytes
    pub const fn capacity(&self) -> usize {
        L
    }

    /// Replace the slot's content with `definition`, translating every `|` to a line break.
    ///
    /// The length is checked before anything is written, a rejected definition leaves the slot
    /// exactly as it was. Returns the stored length on success.
    pub fn define(&mut self, definition: &str) -> Result<usize, MacroError> {
        self.content = translate(definition)?;
        Ok(self.content.len())
    }

    /// Stored multi-line command sequence
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }
}

/// Copy `definition` into a fresh buffer of capacity `L`, turning delimiters into line breaks.
///
/// Both characters are a single byte, so the stored length always equals the input length.
pub fn translate<const L: usize>(definition: &str) -> Result<String<L>, MacroError> {
    let capacity_exceeded = MacroError::CapacityExceeded {
        len: definition.len(),
        capacity: L,
    };
    if definition.len() > L {
        return Err(capacity_exceeded);
    }

    let mut translated = String::new();
    for c in definition.chars() {
        let c = if c == MACRO_DELIMITER { COMMAND_SEPARATOR } else { c };
        translated.push(c).map_err(|_| capacity_exceeded)?;
    }
    Ok(translated)
}
