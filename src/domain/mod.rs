//! Domain layer types and invariants.

pub mod error;
pub mod sections;
pub mod site;
pub mod slug;
pub mod theme;
