//! # GLS Core
//!
//! 核心資料模型與類型定義

pub mod address;
pub mod config;
pub mod depot;
pub mod service;

// Re-export 主要類型
pub use address::{Address, Party};
pub use config::{
    CarrierConfig, CarrierCostMethod, ConsigneeIdentification, ConsignorProfile, SoftwareInfo,
};
pub use depot::DepotNumber;
pub use service::ServiceType;

/// GLS 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum GlsError {
    #[error("無效的服務類型: {0}")]
    InvalidServiceType(String),

    #[error("無效的站點編號: {0}（必須為 2 位數字）")]
    InvalidDepotNumber(String),

    #[error("無效的包裹號: {0}")]
    InvalidParcelNumber(String),

    #[error("檢查碼輸入必須為 11 位數字: {0}")]
    InvalidCheckInput(String),

    #[error("出貨單 {shipment} 狀態為 {state}，無法執行此操作")]
    InvalidState { shipment: String, state: String },

    #[error("出貨單未使用 {0} 承運商")]
    WrongCarrier(String),

    #[error("缺少地址: {0}")]
    MissingAddress(String),

    #[error("承運商配置錯誤: {0}")]
    InvalidConfig(String),

    #[error("承運商 API 錯誤: {0}")]
    UpstreamCarrier(String),

    #[error("包裹號必須唯一: {0}")]
    DuplicateParcelNumber(String),

    #[error("儲存錯誤: {0}")]
    Persistence(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlsError>;
