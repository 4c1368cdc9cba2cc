pub mod grid_csv;
pub mod grid_square;
pub mod home;
pub mod legacy;

pub use grid_csv::{CoordinateSource, CsvGridConfig, CsvToGrid, GeometryFormat, csv_to_grid_csv};
pub use grid_square::GridSquare;
pub use home::{HomeLocation, SharedHome};
pub use legacy::{decode, encode, validate};
