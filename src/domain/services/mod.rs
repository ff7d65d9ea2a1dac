pub mod defaults;
pub mod hours;
pub mod segmentation;
pub mod slots;
pub mod timeline;
