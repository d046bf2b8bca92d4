use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Id, Phone};

/// A registrant tracked through registration and voting status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub id: Id,
    pub national_id: NationalId,
    pub name: String,
    pub phone: Phone,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub status: VoterStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Voter {
    /// Build a fresh voter from a registration payload.
    /// The id is assigned here and never changes.
    pub fn new(spec: VoterSpec) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate('v'),
            national_id: spec.national_id,
            name: spec.name,
            phone: spec.phone,
            dob: spec.dob,
            gender: spec.gender,
            address: spec.address,
            status: VoterStatus::Registered,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registration payload for a new voter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterSpec {
    pub national_id: NationalId,
    pub name: String,
    pub phone: Phone,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub address: String,
}

/// Partial update for an existing voter. Status is deliberately absent:
/// the only defined transition (`registered -> voted`) goes through the
/// mark-voted operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoterPatch {
    pub name: Option<String>,
    pub phone: Option<Phone>,
    pub address: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterStatus {
    Registered,
    Voted,
}

/// A national identity number: exactly twelve ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId(String);

#[derive(Debug, Error)]
#[error("national ID must be exactly 12 digits")]
pub struct NationalIdError;

impl TryFrom<String> for NationalId {
    type Error = NationalIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.len() == 12 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s))
        } else {
            Err(NationalIdError)
        }
    }
}

impl FromStr for NationalId {
    type Err = NationalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.0
    }
}

impl Display for NationalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
