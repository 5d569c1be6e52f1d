//! Read-only typed summary of a project tree.

pub(crate) mod info;
