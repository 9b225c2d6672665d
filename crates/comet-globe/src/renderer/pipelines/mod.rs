pub mod earth;
pub mod markers;
