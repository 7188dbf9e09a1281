use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who can see a snippet. Levels this client doesn't know about are kept verbatim rather than
/// failing the decode of the surrounding record.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    Private,
    Internal,
    Public,
    Other(String),
}

impl Display for Visibility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::Internal => write!(f, "internal"),
            Visibility::Public => write!(f, "public"),
            Visibility::Other(level) => write!(f, "{level}"),
        }
    }
}

impl From<String> for Visibility {
    fn from(value: String) -> Self {
        match value.as_str() {
            "private" => Visibility::Private,
            "internal" => Visibility::Internal,
            "public" => Visibility::Public,
            _ => Visibility::Other(value),
        }
    }
}

impl From<Visibility> for String {
    fn from(value: Visibility) -> Self {
        match value {
            Visibility::Other(level) => level,
            known => known.to_string(),
        }
    }
}

impl FromStr for Visibility {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Visibility::from(s.to_string()))
    }
}
