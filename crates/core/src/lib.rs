//! Domain types, error taxonomy, and validation rules for the travel
//! planner. This crate is pure: no I/O, no async, no framework types.

pub mod error;
pub mod review;
pub mod trip;
pub mod types;
pub mod validate;
