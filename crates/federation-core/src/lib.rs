//! Federation Core - Entities and validation
//!
//! This crate defines the protocol-independent entities of the federation layer:
//! - Field names and closed enumerated domains
//! - Capability units (identity, authorship, visibility, timestamp, text body,
//!   participation and relationship references)
//! - The entity catalog (Post, Image, Comment, Reaction, Relationship, Profile)
//! - The validation engine and its error taxonomy

pub mod address;
pub mod catalog;
pub mod domain;
pub mod entity;
pub mod error;
pub mod field;
pub mod unit;
pub mod validate;

pub use address::*;
pub use catalog::*;
pub use domain::*;
pub use entity::*;
pub use error::*;
pub use field::*;
pub use unit::*;
pub use validate::*;
