pub use get_surface::*;

mod get_surface;
