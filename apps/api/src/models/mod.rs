pub mod interview;
pub mod turn;

pub use turn::{Speaker, Turn};
