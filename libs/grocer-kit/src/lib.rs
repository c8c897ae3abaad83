//! Grocer Kit
//!
//! Building blocks shared by every Grocer module:
//! - `api` - the `{data, message}` response envelope, `ApiError`, and request extractors
//! - `patch` - explicit "set / unchanged" field patches for partial updates
//! - `db` - connection setup and classification of database errors
//! - `module` - the traits a module implements to plug into the server
//! - `logging` - one-shot `tracing` subscriber initialization

pub mod api;
pub mod db;
pub mod logging;
pub mod module;
pub mod patch;

pub use patch::{Patch, PatchSet};
