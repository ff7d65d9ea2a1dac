pub mod backend;
pub mod clock;
pub mod factory;
