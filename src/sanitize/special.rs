use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::tree::node::{Map, Node};
use crate::tree::path::PropertyPath;

/// Replacement for positive infinity: the largest finite double.
pub const POSITIVE_SENTINEL: f64 = f64::MAX;
/// Replacement for negative infinity.
pub const NEGATIVE_SENTINEL: f64 = -f64::MAX;
/// Replacement for NaN.
pub const NAN_SENTINEL: f64 = 0.0;

/// IEEE special values the consuming application cannot parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialValue {
    /// `+∞`.
    PositiveInfinity,
    /// `-∞`.
    NegativeInfinity,
    /// Not a number.
    NaN,
}

impl SpecialValue {
    /// Classify a double; `None` for finite values.
    pub fn of(x: f64) -> Option<Self> {
        if x.is_nan() {
            Some(Self::NaN)
        } else if x == f64::INFINITY {
            Some(Self::PositiveInfinity)
        } else if x == f64::NEG_INFINITY {
            Some(Self::NegativeInfinity)
        } else {
            None
        }
    }

    /// Finite value written in place of this special value.
    pub fn sentinel(self) -> f64 {
        match self {
            Self::PositiveInfinity => POSITIVE_SENTINEL,
            Self::NegativeInfinity => NEGATIVE_SENTINEL,
            Self::NaN => NAN_SENTINEL,
        }
    }

    /// Bare literal used for this value by lenient JSON writers.
    pub fn literal(self) -> &'static str {
        match self {
            Self::PositiveInfinity => "Infinity",
            Self::NegativeInfinity => "-Infinity",
            Self::NaN => "NaN",
        }
    }

    // Shortest text that parses back to exactly `sentinel()`.
    fn sentinel_literal(self) -> &'static str {
        match self {
            Self::PositiveInfinity => "1.7976931348623157e308",
            Self::NegativeInfinity => "-1.7976931348623157e308",
            Self::NaN => "0.0",
        }
    }
}

impl fmt::Display for SpecialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Where a special value was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventLocation {
    /// Tree position, e.g. `$.sourceBin[0].sourceTracks[1].integratedLUFS`.
    Path(String),
    /// Bare literal in the source text (1-based line, 1-based byte column).
    Source {
        /// Line number.
        line: usize,
        /// Byte column within the line.
        column: usize,
    },
}

impl fmt::Display for EventLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => f.write_str(p),
            Self::Source { line, column } => write!(f, "line {line} column {column}"),
        }
    }
}

/// A non-finite value that was replaced by its sentinel.
#[derive(Clone, Debug, PartialEq)]
pub struct SanitizationEvent {
    /// Where the value was.
    pub location: EventLocation,
    /// What it was.
    pub original: SpecialValue,
    /// What it became.
    pub replacement: f64,
}

impl SanitizationEvent {
    fn new(location: EventLocation, original: SpecialValue) -> Self {
        tracing::warn!(
            location = %location,
            original = %original,
            replacement = original.sentinel(),
            "replaced non-finite value"
        );
        Self {
            location,
            original,
            replacement: original.sentinel(),
        }
    }
}

/// Map a double to itself when finite, otherwise to its sentinel.
pub fn sanitize_f64(x: f64) -> f64 {
    SpecialValue::of(x).map_or(x, SpecialValue::sentinel)
}

/// Replace every non-finite real in `tree`.
///
/// Returns the input allocation untouched (shared) when nothing needed replacing.
pub fn sanitize(tree: &Node) -> (Node, Vec<SanitizationEvent>) {
    let mut events = Vec::new();
    let mut path = PropertyPath::root();
    let out = sanitize_node(tree, &mut path, &mut events).unwrap_or_else(|| tree.clone());
    (out, events)
}

fn sanitize_node<'n>(
    node: &'n Node,
    path: &mut PropertyPath<'n>,
    events: &mut Vec<SanitizationEvent>,
) -> Option<Node> {
    match node {
        Node::Real(x) => {
            let special = SpecialValue::of(*x)?;
            events.push(SanitizationEvent::new(
                EventLocation::Path(path.to_string()),
                special,
            ));
            Some(Node::Real(special.sentinel()))
        }
        Node::Array(items) => {
            let mut out: Option<Vec<Node>> = None;
            for (i, item) in items.iter().enumerate() {
                path.push_index(i);
                let replaced = sanitize_node(item, path, events);
                path.pop();
                if let Some(new) = replaced {
                    let buf = out.get_or_insert_with(|| items.to_vec());
                    buf[i] = new;
                }
            }
            out.map(Node::array)
        }
        Node::Object(map) => {
            let mut out: Option<Map> = None;
            for (i, (key, value)) in map.iter().enumerate() {
                path.push_key(key);
                let replaced = sanitize_node(value, path, events);
                path.pop();
                if let Some(new) = replaced {
                    let buf = out.get_or_insert_with(|| map.as_ref().clone());
                    if let Some((_, slot)) = buf.get_index_mut(i) {
                        *slot = new;
                    }
                }
            }
            out.map(|m| Node::Object(Arc::new(m)))
        }
        _ => None,
    }
}

/// Rewrite bare `Infinity`, `-Infinity` and `NaN` literals outside strings into their sentinels.
///
/// Strict JSON parsers reject these literals, yet documents written by lenient tools contain
/// them (loudness metrics are the usual source). Number tokens too large for a double, such as
/// `1e400`, are rewritten the same way. Text inside string literals is never touched.
pub fn relax_special_literals(text: &str) -> (Cow<'_, str>, Vec<SanitizationEvent>) {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut events = Vec::new();
    let mut copied = 0;
    let mut in_string = false;
    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => in_string = false,
                b'\n' => {
                    line += 1;
                    line_start = i + 1;
                }
                _ => {}
            }
            i += 1;
            continue;
        }
        let (hit, len) = match b {
            b'"' => {
                in_string = true;
                (None, 1)
            }
            b'\n' => {
                line += 1;
                line_start = i + 1;
                (None, 1)
            }
            b'-' | b'I' | b'N' | b'0'..=b'9' => special_token(&text[i..]),
            _ => (None, 1),
        };
        if let Some(special) = hit {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
            buf.push_str(&text[copied..i]);
            buf.push_str(special.sentinel_literal());
            events.push(SanitizationEvent::new(
                EventLocation::Source {
                    line,
                    column: i - line_start + 1,
                },
                special,
            ));
            copied = i + len;
        }
        i += len;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            (Cow::Owned(buf), events)
        }
        None => (Cow::Borrowed(text), events),
    }
}

// Classifies the token at the start of `rest`: a bare special literal, a number that overflows
// a double, or neither. Always consumes at least one byte.
fn special_token(rest: &str) -> (Option<SpecialValue>, usize) {
    const LITERALS: [SpecialValue; 3] = [
        SpecialValue::NegativeInfinity,
        SpecialValue::PositiveInfinity,
        SpecialValue::NaN,
    ];

    let literal = LITERALS.into_iter().find(|c| {
        rest.starts_with(c.literal())
            && !rest[c.literal().len()..]
                .starts_with(|ch: char| ch.is_ascii_alphanumeric() || ch == '_')
    });
    if let Some(special) = literal {
        return (Some(special), special.literal().len());
    }

    let len = number_len(rest.as_bytes());
    if len == 0 {
        return (None, 1);
    }
    let overflow = rest[..len]
        .parse::<f64>()
        .ok()
        .and_then(SpecialValue::of)
        .filter(|s| *s != SpecialValue::NaN);
    (overflow, len)
}

// Length of the number-shaped prefix of `bytes`. Signs are accepted first or after an exponent.
fn number_len(bytes: &[u8]) -> usize {
    let mut len = 0;
    for (k, &c) in bytes.iter().enumerate() {
        let sign = matches!(c, b'-' | b'+') && (k == 0 || matches!(bytes[k - 1], b'e' | b'E'));
        if !(c.is_ascii_digit() || matches!(c, b'.' | b'e' | b'E') || sign) {
            break;
        }
        len = k + 1;
    }
    len
}

#[cfg(test)]
#[path = "../../tests/unit/sanitize/special.rs"]
mod tests;
