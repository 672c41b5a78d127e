//! Domain model: entities, value objects and the availability engine.

pub mod availability;
pub mod category;
pub mod item;
pub mod order;
pub mod types;
