//! Tree rewriting: the recursive walker and the per-leaf numeric rules it applies.

pub(crate) mod numeric;
pub(crate) mod walker;
