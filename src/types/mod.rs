//! Core type system and domain definitions
//!
//! This module provides the central type definitions for the gitber lookup
//! library. Payload types pass the REST API's fields through unchanged;
//! identifier types are strongly-typed wrappers.

pub mod organization;
pub mod repository;
pub mod user;

pub use organization::*;
pub use repository::*;
pub use user::*;
