//! Deserializable form structs and their validated payloads.

pub mod categories;
pub mod items;
pub mod orders;
