//! Core library for the canteen admin dashboard.
//!
//! This crate exposes the domain model (including the item availability
//! engine), Diesel-backed repositories, forms and service layers used by the
//! canteen operator's admin application.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
