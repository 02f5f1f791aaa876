//! CLI command implementations

pub(crate) mod common;
pub(crate) mod parse;
pub(crate) mod types;
