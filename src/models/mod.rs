pub mod document;
pub mod turn;

pub use document::*;
pub use turn::*;
