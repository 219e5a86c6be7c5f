//! One repository per entity. Repositories are stateless unit structs with
//! static async methods over a shared [`sqlx::PgPool`].

pub mod bookmark_repo;
pub mod place_repo;
pub mod review_repo;
pub mod trip_place_repo;
pub mod trip_repo;

pub use bookmark_repo::BookmarkRepo;
pub use place_repo::PlaceRepo;
pub use review_repo::ReviewRepo;
pub use trip_place_repo::TripPlaceRepo;
pub use trip_repo::TripRepo;
