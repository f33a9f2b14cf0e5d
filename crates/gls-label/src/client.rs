//! 承運商 API 用戶端介面

use std::collections::BTreeMap;

use gls_core::GlsError;
use serde::{Deserialize, Serialize};

use crate::request::LabelRequest;

/// 回應中追蹤號的欄位鍵值
pub const TRACKING_NUMBER_KEY: &str = "T8913";

/// 承運商 API 用戶端（通訊協定、認證與重試由實作者負責）
pub trait CarrierClient {
    /// 提交標籤請求
    fn submit(&self, request: &LabelRequest) -> gls_core::Result<CarrierResponse>;
}

impl<C: CarrierClient + ?Sized> CarrierClient for &C {
    fn submit(&self, request: &LabelRequest) -> gls_core::Result<CarrierResponse> {
        (**self).submit(request)
    }
}

/// 承運商回應（已解析的欄位）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierResponse {
    pub values: BTreeMap<String, String>,
}

impl CarrierResponse {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// 建構器模式：設置欄位
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 取出追蹤號
    pub fn tracking_number(&self) -> gls_core::Result<String> {
        match self.get(TRACKING_NUMBER_KEY).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(GlsError::UpstreamCarrier(format!(
                "回應缺少追蹤號欄位 {}",
                TRACKING_NUMBER_KEY
            ))),
        }
    }
}

impl FromIterator<(String, String)> for CarrierResponse {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
