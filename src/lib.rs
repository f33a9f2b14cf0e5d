//! # GLS
//!
//! GLS 包裹標籤整合：包裹號生成、標籤請求與追蹤號回寫

pub use gls_label as label;
pub use gls_parcel as parcel;

pub use gls_core::{
    Address, CarrierConfig, CarrierCostMethod, ConsigneeIdentification, ConsignorProfile,
    DepotNumber, GlsError, Party, Result, ServiceType,
};
pub use gls_label::{
    CarrierClient, CarrierResponse, InMemoryPackageStore, LabelRequest, LabelRun, Package,
    PackageLabel, PackageStore, ShipmentLabeler, ShipmentOut, ShipmentState, WeightUom,
};
pub use gls_parcel::{check_digit, ParcelNumber, ParcelNumberGenerator};
