//! # GLS Label
//!
//! 出貨單標籤流程：包裹號指派、請求組裝、提交承運商與儲存追蹤號

pub mod client;
pub mod labeler;
pub mod request;
pub mod shipment;
pub mod store;

// Re-export 主要類型
pub use client::{CarrierClient, CarrierResponse, TRACKING_NUMBER_KEY};
pub use labeler::ShipmentLabeler;
pub use request::{Consignee, Consignor, LabelRequest};
pub use shipment::{Package, ShipmentOut, ShipmentState, WeightUom};
pub use store::{InMemoryPackageStore, PackageStore};

use gls_parcel::ParcelNumber;
use uuid::Uuid;

/// 標籤產生結果
#[derive(Debug, Clone)]
pub struct LabelRun {
    /// 出貨單號
    pub shipment_reference: String,

    /// 各包裹標籤
    pub labels: Vec<PackageLabel>,
}

impl LabelRun {
    pub fn new(shipment_reference: String) -> Self {
        Self {
            shipment_reference,
            labels: Vec::new(),
        }
    }

    /// 本次向承運商請求的標籤數
    pub fn requested_count(&self) -> usize {
        self.labels.iter().filter(|label| label.requested).count()
    }

    /// 所有追蹤號
    pub fn tracking_numbers(&self) -> Vec<&str> {
        self.labels
            .iter()
            .map(|label| label.tracking_number.as_str())
            .collect()
    }
}

/// 單包裹標籤
#[derive(Debug, Clone)]
pub struct PackageLabel {
    pub package_id: Uuid,
    pub package_code: String,
    pub parcel_number: ParcelNumber,
    pub tracking_number: String,

    /// 是否在本次執行中請求
    pub requested: bool,
}
