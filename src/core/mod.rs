//! Core types: error model, query normalization and result envelopes.

pub mod envelope;
pub mod error;
pub mod query;
pub mod request;
pub mod source;
