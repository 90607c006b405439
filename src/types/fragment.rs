//! Phrase fragments contributed to an assembled prompt.

/// A single phrase produced by one lookup, or an explicit "nothing to say".
///
/// Every lookup that can miss (absent section, unparsable keys, dark color)
/// returns [`Fragment::Absent`] instead of failing. The assembler simply
/// skips absent fragments, so a broken lighting maps document shows up as a
/// shorter prompt and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fragment {
    Present(String),
    #[default]
    Absent,
}

impl Fragment {
    /// Wrap `text`, treating empty and whitespace-only text as absent.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::Absent
        } else {
            Self::Present(text)
        }
    }

    /// The phrase, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<&str>> for Fragment {
    fn from(value: Option<&str>) -> Self {
        value.map(Fragment::from_text).unwrap_or_default()
    }
}
