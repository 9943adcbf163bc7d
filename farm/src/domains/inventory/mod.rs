pub use commands::*;
pub use domain::*;
pub use loading::*;
pub use queries::*;

mod commands;
mod domain;
mod loading;
mod queries;
