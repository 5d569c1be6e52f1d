use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::foundation::error::{ProjscaleError, ProjscaleResult};
use crate::sanitize::special::{self, SanitizationEvent};
use crate::tree::node::Node;

/// Output layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level; `None` writes a single line.
    pub indent: Option<usize>,
}

impl EncodeOptions {
    /// Pretty output with `indent` spaces per level.
    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
        }
    }

    /// Single-line output.
    pub fn compact() -> Self {
        Self { indent: None }
    }
}

/// Serialized document bytes together with the special values replaced while writing them.
#[derive(Clone, Debug)]
pub struct Encoded {
    /// UTF-8 JSON text.
    pub bytes: Vec<u8>,
    /// Non-finite reals found in the tree and written as sentinels.
    pub sanitized: Vec<SanitizationEvent>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::pretty(2)
    }
}

/// Serialize `tree`, replacing any non-finite real by its sentinel first.
///
/// Pretty output uses `": "` after keys, writes non-ASCII text as UTF-8 and has no trailing
/// newline.
#[tracing::instrument(skip(tree))]
pub fn encode(tree: &Node, opts: &EncodeOptions) -> ProjscaleResult<Encoded> {
    let (clean, sanitized) = special::sanitize(tree);

    let mut out = Vec::new();
    let written = match opts.indent {
        Some(n) => {
            let indent = b" ".repeat(n);
            let fmt = PrettyFormatter::with_indent(&indent);
            clean.serialize(&mut Serializer::with_formatter(&mut out, fmt))
        }
        None => clean.serialize(&mut Serializer::new(&mut out)),
    };
    written.map_err(|e| ProjscaleError::serde(format!("failed to serialize document: {e}")))?;

    Ok(Encoded {
        bytes: out,
        sanitized,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
