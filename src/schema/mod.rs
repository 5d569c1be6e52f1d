//! Format version detection and lightweight structural checks.
//!
//! Nothing here is a full schema: documents with unexpected shapes are still transformed, and
//! the findings are reported as warnings unless strict mode asks for them to be fatal.

pub(crate) mod validate;
pub(crate) mod version;
