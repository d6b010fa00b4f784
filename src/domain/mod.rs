// Domain layer: the record and entity models. Validation lives in utils.

pub mod model;
