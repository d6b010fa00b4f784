use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{
    validate_age, validate_birth_date, validate_name, validate_post_code,
};

/// Unvalidated input row, exactly as parsed from the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub first_name: String,
    pub sur_name: String,
    pub gender_code: String,
    pub country: String,
    pub post_code: String,
    pub age: u32,
    pub birth_date: String,
}

impl RawRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: &str,
        sur_name: &str,
        gender_code: &str,
        country: &str,
        post_code: &str,
        age: u32,
        birth_date: &str,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            sur_name: sur_name.to_string(),
            gender_code: gender_code.to_string(),
            country: country.to_string(),
            post_code: post_code.to_string(),
            age,
            birth_date: birth_date.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(RosterError::ValidationError {
                field: "gender_code".to_string(),
                value: other.to_string(),
                reason: "Expected 'M' or 'F'".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
        }
    }
}

/// Validated person entity.
///
/// A `Person` can only come out of [`Person::from_record`], which runs every
/// field validator before the struct exists. There is no mutation API, so a
/// partially-validated instance is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    sur_name: String,
    gender: Gender,
    country: String,
    post_code: String,
    age: u32,
    birth_date: String,
}

impl Person {
    /// Builds a validated person from a raw record.
    ///
    /// Fields are checked in source order; the first failure aborts the whole
    /// construction and reports the offending field and value. The surname is
    /// stored trimmed, the first name as given.
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        validate_name("first_name", &record.first_name)?;
        validate_name("sur_name", &record.sur_name)?;
        let gender = Gender::from_code(&record.gender_code)?;
        validate_post_code("post_code", &record.post_code)?;
        validate_age("age", record.age)?;
        validate_birth_date("birth_date", &record.birth_date)?;

        Ok(Self {
            first_name: record.first_name.clone(),
            sur_name: record.sur_name.trim().to_string(),
            gender,
            country: record.country.clone(),
            post_code: record.post_code.clone(),
            age: record.age,
            birth_date: record.birth_date.clone(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn sur_name(&self) -> &str {
        &self.sur_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn post_code(&self) -> &str {
        &self.post_code
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }
}
