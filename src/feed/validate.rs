use log::warn;
use xml::ParserConfig;

/// Outcome of the well-formedness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlVerdict {
    WellFormed,
    /// Carries the parser's description of the first error.
    Malformed(String),
}

impl XmlVerdict {
    pub fn is_well_formed(&self) -> bool {
        matches!(self, XmlVerdict::WellFormed)
    }
}

/// Runs the bytes through a streaming XML parser without building a tree.
///
/// A malformed document is only reported here; whether to keep it is up to the caller.
pub fn validate_xml(content: &[u8]) -> XmlVerdict {
    let reader = ParserConfig::new()
        .allow_multiple_root_elements(false)
        .create_reader(content);
    for event in reader {
        if let Err(e) = event {
            warn!("XML validation error: {}", e);
            return XmlVerdict::Malformed(e.to_string());
        }
    }
    XmlVerdict::WellFormed
}
