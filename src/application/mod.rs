//! Application services layer scaffolding.

pub mod composer;
pub mod error;
pub mod repos;
pub mod resolver;
pub mod site;
