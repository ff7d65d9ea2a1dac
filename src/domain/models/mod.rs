pub mod amenity;
pub mod auth;
pub mod reservation;
pub mod segment;
pub mod slot;
pub mod time;
