pub mod board;
pub mod cell;
pub mod config;
pub mod driver;
pub mod seed;
pub mod term;
pub mod viewport;

/// Cell coordinate along either axis. Negative values are as valid as positive ones.
pub type Coord = i64;
