use crate::classify::media::MediaKind;
use crate::classify::table::{self, Category};
use crate::foundation::core::ScaleFactor;
use crate::tree::node::Node;

/// How a scaled integer leaf is brought back to an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Round half to even (banker's rounding).
    HalfEven,
    /// Truncate toward zero, to whole ticks.
    Truncate,
}

/// Everything about a field's surroundings that can change how it scales.
#[derive(Clone, Copy, Debug)]
pub struct ScaleContext<'a> {
    /// Field name.
    pub key: &'a str,
    /// Nearest enclosing media kind.
    pub media: Option<MediaKind>,
    /// Whether duration-preserving media keep their duration-like fields.
    pub preserve_audio_duration: bool,
    /// Whether the field belongs directly to a keyframe entry.
    pub in_keyframe: bool,
}

impl ScaleContext<'_> {
    /// True when the enclosing media keeps this field's duration unscaled.
    pub fn duration_exempt(&self) -> bool {
        self.preserve_audio_duration
            && !self.in_keyframe
            && self.media.is_some_and(|m| !m.policy().scales_duration)
    }
}

/// Result of [`scale`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleOutcome {
    /// The value was rewritten.
    Scaled(Node),
    /// The value matches its category but its media kind keeps it unchanged.
    Exempt,
    /// The value does not have the shape the category expects.
    NotApplicable,
}

/// Multiply one numeric leaf, keeping integers integer and reals real.
///
/// Returns `None` for non-numeric nodes. Real results may overflow to infinity; the pass
/// sanitizes the whole output tree afterwards.
pub fn scale_number(node: &Node, factor: ScaleFactor, rounding: Rounding) -> Option<Node> {
    match *node {
        Node::Int(i) => Some(Node::Int(to_int(i as f64 * factor.get(), rounding))),
        Node::UInt(u) => Some(to_uint(u as f64 * factor.get(), rounding)),
        Node::Real(r) => {
            let x = r * factor.get();
            Some(Node::Real(match rounding {
                Rounding::HalfEven => x,
                Rounding::Truncate => x.trunc(),
            }))
        }
        _ => None,
    }
}

fn to_int(x: f64, rounding: Rounding) -> i64 {
    let x = match rounding {
        Rounding::HalfEven => x.round_ties_even(),
        Rounding::Truncate => x.trunc(),
    };
    // `as` saturates at the i64 bounds and maps NaN to zero.
    x as i64
}

// Results that fit back into i64 become `Int`; the rest saturate at u64::MAX.
fn to_uint(x: f64, rounding: Rounding) -> Node {
    let x = match rounding {
        Rounding::HalfEven => x.round_ties_even(),
        Rounding::Truncate => x.trunc(),
    };
    if x < i64::MAX as f64 {
        Node::Int(x as i64)
    } else {
        Node::from(x as u64)
    }
}

/// Apply `factor` to a classified field value.
pub fn scale(
    value: &Node,
    factor: ScaleFactor,
    category: Category,
    ctx: &ScaleContext<'_>,
) -> ScaleOutcome {
    match category {
        Category::SpatialScalar => match scale_number(value, factor, Rounding::HalfEven) {
            Some(n) => ScaleOutcome::Scaled(n),
            None => ScaleOutcome::NotApplicable,
        },
        Category::TemporalScalar => {
            if !value.is_number() {
                return ScaleOutcome::NotApplicable;
            }
            if ctx.duration_exempt() && table::is_duration_like(ctx.key) {
                return ScaleOutcome::Exempt;
            }
            scale_number(value, factor, Rounding::HalfEven)
                .map_or(ScaleOutcome::NotApplicable, ScaleOutcome::Scaled)
        }
        Category::SpatialArray(len) => scale_elements(value, len, factor, Rounding::HalfEven),
        Category::TemporalRange(len) => {
            if ctx.duration_exempt() {
                shift_range(value, len, factor)
            } else {
                scale_elements(value, len, factor, Rounding::Truncate)
            }
        }
        Category::PassThrough => ScaleOutcome::NotApplicable,
    }
}

fn fixed_array(value: &Node, len: usize) -> Option<&[Node]> {
    value
        .as_array()
        .filter(|items| items.len() == len && items.iter().any(Node::is_number))
}

fn scale_elements(
    value: &Node,
    len: usize,
    factor: ScaleFactor,
    rounding: Rounding,
) -> ScaleOutcome {
    let Some(items) = fixed_array(value, len) else {
        return ScaleOutcome::NotApplicable;
    };
    let scaled = items
        .iter()
        .map(|item| scale_number(item, factor, rounding).unwrap_or_else(|| item.clone()))
        .collect();
    ScaleOutcome::Scaled(Node::array(scaled))
}

// Moves the range start in time and keeps its length.
fn shift_range(value: &Node, len: usize, factor: ScaleFactor) -> ScaleOutcome {
    let Some(items) = fixed_array(value, len) else {
        return ScaleOutcome::NotApplicable;
    };
    let Some(start) = items[0].as_f64() else {
        return ScaleOutcome::NotApplicable;
    };
    let Some(new_start) = scale_number(&items[0], factor, Rounding::Truncate) else {
        return ScaleOutcome::NotApplicable;
    };
    let delta = new_start.as_f64().unwrap_or(start) - start;

    let mut out = Vec::with_capacity(items.len());
    out.push(new_start);
    out.extend(items[1..].iter().map(|item| match *item {
        Node::Int(i) => Node::Int(to_int(i as f64 + delta, Rounding::HalfEven)),
        Node::UInt(u) => to_uint(u as f64 + delta, Rounding::HalfEven),
        Node::Real(r) => Node::Real(r + delta),
        _ => item.clone(),
    }));
    ScaleOutcome::Scaled(Node::array(out))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/numeric.rs"]
mod tests;
