//! Untyped, order-preserving project tree and property paths.

pub(crate) mod node;
pub(crate) mod path;
