#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]

pub mod builder;
pub mod doors;
pub mod error;
pub mod maze;
pub mod output;
pub mod smooth;
pub mod stage;

pub use builder::{BuildReport, MapArt, MapBuilder};
pub use error::BuildError;
pub use stage::{Cell, Dimensions, Stage, Tile};
