pub mod coord;
pub mod error;

pub use coord::{Coordinate, to_radians};
pub use error::LocatorError;
