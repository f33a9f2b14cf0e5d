//! 包裹號模型

use std::fmt;
use std::str::FromStr;

use gls_core::{DepotNumber, GlsError, ServiceType};
use serde::{Deserialize, Serialize};

use crate::{check_digit_char, PARCEL_NUMBER_LEN, SERIAL_LEN};

/// 12 位 GLS 包裹號（建立後不可變）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParcelNumber(String);

impl ParcelNumber {
    /// 由站點、服務與 7 位流水碼組裝包裹號（自動計算檢查碼）
    pub fn assemble(
        depot: &DepotNumber,
        service: ServiceType,
        serial: &str,
    ) -> gls_core::Result<Self> {
        if serial.len() != SERIAL_LEN || !serial.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GlsError::InvalidParcelNumber(format!(
                "流水碼必須為 {} 位數字: {}",
                SERIAL_LEN, serial
            )));
        }

        let mut number = String::with_capacity(PARCEL_NUMBER_LEN);
        number.push_str(depot.as_str());
        number.push_str(service.code());
        number.push_str(serial);

        let check = check_digit_char(&number)?;
        number.push(check);

        Ok(Self(number))
    }

    /// 解析並驗證既有包裹號（長度、數字與檢查碼）
    pub fn parse(value: &str) -> gls_core::Result<Self> {
        if value.len() != PARCEL_NUMBER_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GlsError::InvalidParcelNumber(value.to_string()));
        }

        let (base, check) = value.split_at(PARCEL_NUMBER_LEN - 1);
        let expected = check_digit_char(base)?;
        if !check.starts_with(expected) {
            return Err(GlsError::InvalidParcelNumber(format!(
                "{}（檢查碼應為 {}）",
                value, expected
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 站點編號（第 1-2 位）
    pub fn depot(&self) -> &str {
        &self.0[0..2]
    }

    /// 服務代碼（第 3-4 位）
    pub fn service_code(&self) -> &str {
        &self.0[2..4]
    }

    /// 服務類型（代碼不在列舉中時為 None）
    pub fn service_type(&self) -> Option<ServiceType> {
        ServiceType::from_code(self.service_code())
    }

    /// 隨機流水碼（第 5-11 位）
    pub fn serial(&self) -> &str {
        &self.0[4..11]
    }

    /// 檢查碼（第 12 位）
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[11] - b'0'
    }
}

impl FromStr for ParcelNumber {
    type Err = GlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ParcelNumber {
    type Error = GlsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ParcelNumber> for String {
    fn from(number: ParcelNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for ParcelNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParcelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
