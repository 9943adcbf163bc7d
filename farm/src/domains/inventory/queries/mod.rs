pub use get_quantity::*;

mod get_quantity;
