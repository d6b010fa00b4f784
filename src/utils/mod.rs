pub mod error;
pub mod logger;
pub mod printer;
pub mod validation;
