//! Diesel row models and conversions to/from the domain layer.

pub mod category;
pub mod item;
pub mod order;
