mod color;
mod enums;

pub use color::{Color, Rgb};
pub use enums::{Direction, Phase};
