//! Federation Diaspora - Diaspora protocol profile
//!
//! Narrows generic federation entities to their Diaspora forms and renders them
//! as Diaspora XML:
//! - `entities`: protocol entities and the generic -> protocol adapter
//! - `render`: fixed, ordered element trees per entity kind

pub mod entities;
pub mod render;

pub use entities::*;
pub use render::*;
