pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::builder::build_person_list;
pub use crate::domain::model::{Gender, Person, RawRecord};
pub use crate::utils::error::{Result, RosterError};
