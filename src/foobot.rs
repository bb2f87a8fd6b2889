mod client;
mod device;
mod error;
mod reading;

pub use client::*;
pub use device::*;
pub use error::*;
pub use reading::*;
