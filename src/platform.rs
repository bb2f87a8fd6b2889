mod config;
mod entity;
mod setup;

pub use config::*;
pub use entity::*;
pub use setup::*;
