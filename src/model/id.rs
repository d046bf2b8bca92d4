use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rocket::request::FromParam;
use serde::{Deserialize, Serialize};

/// An opaque record identifier: a one-letter kind prefix plus a random token,
/// e.g. `v-1f2a9c03`. Assigned by the registry on creation and immutable
/// afterwards; clients never choose their own.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Generate a fresh id with the given kind prefix.
    pub fn generate(prefix: char) -> Self {
        let token: u32 = rand::random();
        Self(format!("{prefix}-{token:08x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'r> FromParam<'r> for Id {
    type Error = &'r str;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        if param.is_empty() {
            Err(param)
        } else {
            Ok(Self(param.to_string()))
        }
    }
}
