/// Parsing and rendering options for a [`QueryParameterSet`](crate::QueryParameterSet).
///
/// The defaults reproduce the legacy behavior: values are neither encoded nor
/// decoded and segments without `=` are accepted as absent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub(crate) encode: bool,
    pub(crate) strict: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percent-encode keys and values when rendering, decode them when parsing.
    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Reject segments without `=` and undecodable percent sequences.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_encoding(&self) -> bool {
        self.encode
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}
