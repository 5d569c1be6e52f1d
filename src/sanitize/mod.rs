//! Replacement of IEEE special values by finite sentinels.

pub(crate) mod special;
