pub use move_body::*;
pub use turn_body::*;

mod move_body;
mod turn_body;
