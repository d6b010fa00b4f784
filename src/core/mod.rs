pub mod builder;
pub mod sample;
pub mod sequence;

pub use crate::domain::model::{Gender, Person, RawRecord};
pub use crate::utils::error::Result;
