pub mod clock;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logger;
pub mod settings;
pub mod snake;
pub mod term;

pub use crate::grid::{Cell, Direction, Grid};
