//! 出貨站點編號

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GlsError;

/// GLS 出貨站點編號（固定 2 位數字）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepotNumber(String);

impl DepotNumber {
    /// 解析並驗證站點編號
    pub fn parse(value: &str) -> crate::Result<Self> {
        if value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value.to_string()))
        } else {
            Err(GlsError::InvalidDepotNumber(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DepotNumber {
    type Err = GlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DepotNumber {
    type Error = GlsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DepotNumber> for String {
    fn from(depot: DepotNumber) -> Self {
        depot.0
    }
}

impl AsRef<str> for DepotNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
