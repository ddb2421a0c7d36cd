pub mod grid;
pub mod obstacle;
