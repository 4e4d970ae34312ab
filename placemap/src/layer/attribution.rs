//! Attribution of the data displayed by a layer.

/// Represents an attribution, typically used for citing sources or providing
/// credit.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribution {
    /// The attribution text. This is typically the citation or credit message.
    pub text: &'static str,
    /// An optional URL where more information about the attribution can be
    /// found.
    pub url: Option<&'static str>,
}

impl Attribution {
    /// Creates a new `Attribution` with the given text and optional URL.
    pub fn new(text: &'static str, url: Option<&'static str>) -> Self {
        Self { text, url }
    }
}
