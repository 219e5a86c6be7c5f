//! Request handlers, one module per resource.

pub mod bookmarks;
pub mod itinerary;
pub mod places;
pub mod reviews;
pub mod trips;
