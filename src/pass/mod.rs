//! One spatial or temporal pass over a document, from bytes to bytes.

pub(crate) mod config;
pub(crate) mod report;
pub(crate) mod run;
