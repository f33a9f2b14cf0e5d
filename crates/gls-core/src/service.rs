//! GLS 服務/產品類型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GlsError;

/// GLS 服務類型（封閉列舉，每個服務對應固定的 2 位產品代碼）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// 歐洲商務包裹（標準）
    #[default]
    EuroBusinessParcel,
    /// 貨到付款 DAC
    CashServiceDac,
    /// 貨到付款 - 交換服務
    CashServiceExchange,
    /// 送達工作地點
    DeliveryAtWork,
    /// 24 小時保證送達
    #[serde(rename = "guaranteed_24")]
    Guaranteed24,
    /// 門市退貨
    ShopReturn,
    /// 公司間運輸
    Intercompany,
    /// 快遞包裹
    ExpressParcel,
    /// 交換服務 - 去程運輸
    ExchangeOutgoing,
    /// 取件與退回
    PickReturn,
}

impl ServiceType {
    /// 所有服務類型
    pub const ALL: [ServiceType; 10] = [
        ServiceType::EuroBusinessParcel,
        ServiceType::CashServiceDac,
        ServiceType::CashServiceExchange,
        ServiceType::DeliveryAtWork,
        ServiceType::Guaranteed24,
        ServiceType::ShopReturn,
        ServiceType::Intercompany,
        ServiceType::ExpressParcel,
        ServiceType::ExchangeOutgoing,
        ServiceType::PickReturn,
    ];

    /// 2 位產品代碼
    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::EuroBusinessParcel => "10",
            ServiceType::CashServiceDac => "71",
            ServiceType::CashServiceExchange => "72",
            ServiceType::DeliveryAtWork => "74",
            ServiceType::Guaranteed24 => "75",
            ServiceType::ShopReturn => "76",
            ServiceType::Intercompany => "78",
            ServiceType::ExpressParcel => "85",
            ServiceType::ExchangeOutgoing => "87",
            ServiceType::PickReturn => "89",
        }
    }

    /// 鍵值（與 ERP 選項欄位一致）
    pub fn key(&self) -> &'static str {
        match self {
            ServiceType::EuroBusinessParcel => "euro_business_parcel",
            ServiceType::CashServiceDac => "cash_service_dac",
            ServiceType::CashServiceExchange => "cash_service_exchange",
            ServiceType::DeliveryAtWork => "delivery_at_work",
            ServiceType::Guaranteed24 => "guaranteed_24",
            ServiceType::ShopReturn => "shop_return",
            ServiceType::Intercompany => "intercompany",
            ServiceType::ExpressParcel => "express_parcel",
            ServiceType::ExchangeOutgoing => "exchange_outgoing",
            ServiceType::PickReturn => "pick_return",
        }
    }

    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::EuroBusinessParcel => "[Euro] Business Parcel(Standard)",
            ServiceType::CashServiceDac => "Cash Service DAC",
            ServiceType::CashServiceExchange => "Cash Service - Exchange Service",
            ServiceType::DeliveryAtWork => "Delivery At Work - Service",
            ServiceType::Guaranteed24 => "Guaranteed 24 - Service",
            ServiceType::ShopReturn => "Shop Return - Service",
            ServiceType::Intercompany => "InterCompany - Service",
            ServiceType::ExpressParcel => "Express Parcel",
            ServiceType::ExchangeOutgoing => "Exchange - Service Outgoing Transport",
            ServiceType::PickReturn => "Pick Up and Return - Exchange/Cash+Exchange",
        }
    }

    /// 依鍵值查找服務類型
    pub fn from_key(key: &str) -> crate::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|service| service.key() == key)
            .ok_or_else(|| GlsError::InvalidServiceType(key.to_string()))
    }

    /// 依產品代碼查找服務類型
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|service| service.code() == code)
    }
}

impl FromStr for ServiceType {
    type Err = GlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
