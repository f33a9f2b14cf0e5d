//! 標籤請求組裝

use chrono::NaiveDate;
use gls_core::{CarrierConfig, GlsError, SoftwareInfo};
use gls_parcel::ParcelNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shipment::{Package, ShipmentOut};

/// 寄件方
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consignor {
    pub customer_number: u64,
    pub name: String,
    pub name2: Option<String>,
    pub street: String,
    pub country: String,
    pub zip: String,
    pub place: String,
    pub label: String,
    pub consignor: String,
}

/// 收件方
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consignee {
    pub country: String,
    pub zip: String,
    pub customer_number_label: String,
    pub customer_number: u64,
    pub id_type: String,
    pub id_value: u64,
}

/// GLS 標籤請求（每個包裹一筆）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRequest {
    pub software: SoftwareInfo,
    pub consignor: Consignor,
    pub consignee: Consignee,
    pub shipping_date: NaiveDate,

    /// 包裹編碼
    pub parcel: String,

    /// 包裹重量（公斤）
    pub parcel_weight: Decimal,

    pub parcel_number: ParcelNumber,
    pub quantity: u32,

    pub gls_contract: String,
    pub gls_customer_id: String,
    pub location: String,
}

impl LabelRequest {
    /// 由出貨單、包裹與承運商配置組裝請求
    pub fn assemble(
        shipment: &ShipmentOut,
        package: &Package,
        config: &CarrierConfig,
    ) -> gls_core::Result<Self> {
        let parcel_number = package.parcel_number.clone().ok_or_else(|| {
            GlsError::InvalidParcelNumber(format!("包裹 {} 尚未指派包裹號", package.code))
        })?;

        let consignee_address = shipment.customer.primary_address().ok_or_else(|| {
            GlsError::MissingAddress(format!("客戶 {}", shipment.customer.name))
        })?;
        let consignor_address = shipment.company.primary_address().ok_or_else(|| {
            GlsError::MissingAddress(format!("公司 {}", shipment.company.name))
        })?;

        let identification = &config.consignee_identification;

        Ok(Self {
            software: config.software.clone(),
            consignor: Consignor {
                customer_number: config.consignor.customer_number,
                name: shipment.company.name.clone(),
                name2: consignor_address.name.clone(),
                street: consignor_address.street.clone(),
                country: consignor_address.country_code.clone(),
                zip: consignor_address.zip.clone(),
                place: consignor_address.city.clone(),
                label: config.consignor.label.clone(),
                consignor: config.consignor.consignor.clone(),
            },
            consignee: Consignee {
                country: consignee_address.country_code.clone(),
                zip: consignee_address.zip.clone(),
                customer_number_label: identification.customer_number_label.clone(),
                customer_number: identification.customer_number,
                id_type: identification.id_type.clone(),
                id_value: identification.id_value,
            },
            shipping_date: shipment.shipping_date(),
            parcel: package.code.clone(),
            parcel_weight: package.weight_in_kg(),
            parcel_number,
            quantity: 1,
            gls_contract: config.gls_contract.clone(),
            gls_customer_id: config.gls_customer_id.clone(),
            location: config.gls_location.clone(),
        })
    }

    /// 序列化為 JSON（除錯與稽核用）
    pub fn to_json(&self) -> gls_core::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
