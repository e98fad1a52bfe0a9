//! Domain primitives shared by the todo service crates.
//!
//! Holds the identifier aliases, the domain error type and the input
//! rules enforced at the service boundary. No database or HTTP types live
//! here.

pub mod error;
pub mod types;
pub mod validation;
