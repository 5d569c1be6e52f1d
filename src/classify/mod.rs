//! Key classification: which numeric fields belong to which pass.

pub(crate) mod media;
pub(crate) mod rules;
pub(crate) mod table;
