//! Domain types for the script service.
//!
//! Nothing here performs I/O: the request payload, the identifiers it
//! carries, the job record handed to the store and the fixed instruction
//! sent to the completion provider all live in this crate so the API,
//! completion and store crates agree on one vocabulary.

pub mod error;
pub mod identifier;
pub mod job;
pub mod prompt;
pub mod request;
