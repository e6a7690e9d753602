pub mod error;
pub mod tempo;

pub use crate::error::DetectError;
pub use crate::tempo::{BpmEstimate, TempoRange};
