/// An `M<code> [argument]` command line.
///
/// Whether the code actually addresses a macro slot is decided by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Trigger<'a> {
    /// Number after the `M`
    pub code: u16,
    /// Everything after the code, leading whitespace removed. May be empty.
    pub argument: &'a str,
}

impl<'a> Trigger<'a> {
    /// Parse a command line.
    ///
    /// A `;` starts a comment which runs to the end of the line. Returns `None` for anything
    /// which isn't an M-code, including codes glued to other text like `M9000X`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = match line.find(';') {
            Some(comment) => &line[..comment],
            None => line,
        }
        .trim();

        let rest = line.strip_prefix(['M', 'm'])?;
        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits_end == 0 {
            return None;
        }
        let (digits, tail) = rest.split_at(digits_end);
        if !tail.is_empty() && !tail.starts_with(|c: char| c.is_ascii_whitespace()) {
            return None;
        }

        Some(Self {
            code: digits.parse().ok()?,
            argument: tail.trim_start(),
        })
    }

    /// A non-empty argument defines the slot, an empty one plays it
    pub fn is_define(&self) -> bool {
        !self.argument.is_empty()
    }
}
