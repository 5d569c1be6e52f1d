//! Byte-level reading and writing of project documents.

pub(crate) mod decode;
pub(crate) mod encode;
