//! Wire and presentation models for the crop yield services

mod category;
mod forecast;
mod prediction;
mod service;

pub use category::*;
pub use forecast::*;
pub use prediction::*;
pub use service::*;
