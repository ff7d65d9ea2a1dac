pub mod amenity;
pub mod health;
pub mod segments;
