//! Row structs and request DTOs, one module per entity.

pub mod bookmark;
pub mod place;
pub mod review;
pub mod trip;
pub mod trip_place;
