//! Federation Wire - Ordered element trees and XML rendering
//!
//! This crate implements the dialect-independent parts of the wire format:
//! - Ordered element trees
//! - Value transforms (boolean tokens, timestamp pattern, tag strings)
//! - XML writer and its configuration
//! - Payload document wrapper

pub mod element;
pub mod payload;
pub mod value;
pub mod writer;

pub use element::*;
pub use payload::*;
pub use value::*;
pub use writer::*;
