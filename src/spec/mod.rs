//! Input contract: the already validated specification tree.
//!
//! Loading and validating the serialized specification happens upstream; the
//! generator consumes these structs read-only.

mod types;

pub use types::*;
