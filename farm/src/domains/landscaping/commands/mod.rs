pub use till_place::*;
pub use untill_place::*;

mod till_place;
mod untill_place;
