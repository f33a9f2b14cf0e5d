//! 地址與往來對象模型

use serde::{Deserialize, Serialize};

/// 郵寄地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// 地址名稱（收件人/部門）
    pub name: Option<String>,

    /// 街道
    pub street: String,

    /// 郵遞區號
    pub zip: String,

    /// 城市
    pub city: String,

    /// 國家代碼（ISO 3166-1 alpha-2）
    pub country_code: String,
}

impl Address {
    /// 創建新的地址
    pub fn new(street: String, zip: String, city: String, country_code: String) -> Self {
        Self {
            name: None,
            street,
            zip,
            city,
            country_code,
        }
    }

    /// 建構器模式：設置地址名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

/// 往來對象（客戶或公司本身）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub addresses: Vec<Address>,
}

impl Party {
    pub fn new(name: String) -> Self {
        Self {
            name,
            addresses: Vec::new(),
        }
    }

    /// 建構器模式：添加地址
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    /// 主要地址（列印標籤時使用第一個地址）
    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.first()
    }
}
