use crate::foundation::error::{ProjscaleError, ProjscaleResult};
use crate::sanitize::special::{self, SanitizationEvent};
use crate::tree::node::Node;

const BOM: char = '\u{feff}';

/// A parsed document together with the special values replaced while reading it.
#[derive(Clone, Debug)]
pub struct Decoded {
    /// The document tree, free of non-finite reals.
    pub tree: Node,
    /// Replacements made while reading.
    pub sanitized: Vec<SanitizationEvent>,
}

/// Parse raw document bytes.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode(bytes: &[u8]) -> ProjscaleResult<Decoded> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ProjscaleError::parse(format!("document is not valid UTF-8: {e}")))?;
    decode_str(text)
}

/// Parse a document already held as text.
pub fn decode_str(text: &str) -> ProjscaleResult<Decoded> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let (relaxed, mut sanitized) = special::relax_special_literals(text);

    let parsed: Node = serde_json::from_str(&relaxed)
        .map_err(|e| ProjscaleError::parse(format!("malformed JSON: {e}")))?;

    let (tree, events) = special::sanitize(&parsed);
    sanitized.extend(events);
    if !sanitized.is_empty() {
        tracing::debug!(count = sanitized.len(), "special values replaced on read");
    }
    Ok(Decoded { tree, sanitized })
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
