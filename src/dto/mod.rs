//! Plain data shapes handed to the UI layer.

pub mod dashboard;
pub mod menu;
pub mod orders;
