//! Code-unit addressable document text

/// Document text addressed by UTF-16 code units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    text: String,
    units: Vec<u16>,
}

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let units = text.encode_utf16().collect();
        Self { text, units }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Code unit at `pos`, or `None` past the end of the text
    pub fn unit_at(&self, pos: usize) -> Option<u16> {
        self.units.get(pos).copied()
    }

    /// Check whether the code unit at `pos` is one of `breaks`
    ///
    /// Positions past the end and lone surrogates never count as breaks.
    pub fn is_break_at(&self, pos: usize, breaks: &[char]) -> bool {
        self.unit_at(pos)
            .and_then(|unit| char::from_u32(u32::from(unit)))
            .is_some_and(|c| breaks.contains(&c))
    }

    /// Text between two code-unit offsets, clamped to the text bounds
    pub fn slice(&self, from: usize, to: usize) -> String {
        let end = to.min(self.units.len());
        let start = from.min(end);
        String::from_utf16_lossy(&self.units[start..end])
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
