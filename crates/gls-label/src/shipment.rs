//! 出貨單與包裹模型

use std::fmt;

use chrono::NaiveDate;
use gls_core::{CarrierConfig, DepotNumber, GlsError, Party, ServiceType};
use gls_parcel::ParcelNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 重量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUom {
    Kilogram,
    Gram,
    Pound,
}

impl WeightUom {
    /// 換算為公斤的係數
    pub fn kg_factor(&self) -> Decimal {
        match self {
            WeightUom::Kilogram => Decimal::ONE,
            WeightUom::Gram => Decimal::new(1, 3),
            WeightUom::Pound => Decimal::new(45_359_237, 8),
        }
    }
}

/// 包裹
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// 包裹ID
    pub id: Uuid,

    /// 包裹編碼（序號）
    pub code: String,

    /// 重量
    pub weight: Decimal,

    /// 重量單位
    pub weight_uom: WeightUom,

    /// GLS 包裹號（一經指派不再變更）
    pub parcel_number: Option<ParcelNumber>,

    /// 承運商追蹤號
    pub tracking_number: Option<String>,
}

impl Package {
    /// 創建新的包裹
    pub fn new(code: String, weight: Decimal, weight_uom: WeightUom) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            weight,
            weight_uom,
            parcel_number: None,
            tracking_number: None,
        }
    }

    /// 建構器模式：設置既有包裹號
    pub fn with_parcel_number(mut self, parcel_number: ParcelNumber) -> Self {
        self.parcel_number = Some(parcel_number);
        self
    }

    /// 建構器模式：設置既有追蹤號
    pub fn with_tracking_number(mut self, tracking_number: String) -> Self {
        self.tracking_number = Some(tracking_number);
        self
    }

    /// 以公斤表示的重量（GLS 只接受公斤）
    pub fn weight_in_kg(&self) -> Decimal {
        (self.weight * self.weight_uom.kg_factor()).normalize()
    }

    /// 是否已取得追蹤號
    pub fn has_label(&self) -> bool {
        self.tracking_number.is_some()
    }
}

/// 出貨單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentState {
    Draft,
    Waiting,
    Assigned,
    Packed,
    Done,
    Cancelled,
}

impl ShipmentState {
    /// 是否允許產生標籤
    pub fn allows_labels(&self) -> bool {
        matches!(self, ShipmentState::Packed | ShipmentState::Done)
    }
}

impl fmt::Display for ShipmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipmentState::Draft => "draft",
            ShipmentState::Waiting => "waiting",
            ShipmentState::Assigned => "assigned",
            ShipmentState::Packed => "packed",
            ShipmentState::Done => "done",
            ShipmentState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// 出貨單（客戶出貨）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentOut {
    /// 出貨單ID
    pub id: Uuid,

    /// 出貨單號
    pub reference: String,

    /// 狀態
    pub state: ShipmentState,

    /// 客戶（收件方）
    pub customer: Party,

    /// 公司（寄件方）
    pub company: Party,

    /// 承運商
    pub carrier: Option<CarrierConfig>,

    /// GLS 站點編號
    pub gls_depot_number: Option<DepotNumber>,

    /// GLS 服務類型
    pub gls_service_type: ServiceType,

    /// 計劃出貨日
    pub planned_date: NaiveDate,

    /// 實際出貨日
    pub effective_date: Option<NaiveDate>,

    /// 包裹
    pub packages: Vec<Package>,
}

impl ShipmentOut {
    /// 創建新的出貨單
    pub fn new(reference: String, customer: Party, company: Party, planned_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference,
            state: ShipmentState::Draft,
            customer,
            company,
            carrier: None,
            gls_depot_number: None,
            gls_service_type: ServiceType::default(),
            planned_date,
            effective_date: None,
            packages: Vec::new(),
        }
    }

    /// 建構器模式：設置狀態
    pub fn with_state(mut self, state: ShipmentState) -> Self {
        self.state = state;
        self
    }

    /// 建構器模式：設置實際出貨日
    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// 建構器模式：添加包裹
    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    /// 是否使用 GLS 出貨
    pub fn is_gls_shipping(&self) -> bool {
        self.carrier.as_ref().is_some_and(CarrierConfig::is_gls)
    }

    /// 變更承運商；GLS 承運商會帶入預設站點與服務類型
    pub fn apply_carrier(&mut self, carrier: CarrierConfig) {
        if carrier.is_gls() {
            if let Some(depot) = &carrier.default_depot_number {
                self.gls_depot_number = Some(depot.clone());
            }
            self.gls_service_type = carrier.default_service_type;
        }
        self.carrier = Some(carrier);
    }

    /// 覆寫 GLS 站點與服務類型（僅限 GLS 出貨，已完成的出貨單為唯讀）
    pub fn set_gls_options(
        &mut self,
        depot: DepotNumber,
        service: ServiceType,
    ) -> gls_core::Result<()> {
        if self.state == ShipmentState::Done {
            return Err(GlsError::InvalidState {
                shipment: self.reference.clone(),
                state: self.state.to_string(),
            });
        }
        if !self.is_gls_shipping() {
            return Err(GlsError::WrongCarrier("GLS".to_string()));
        }
        self.gls_depot_number = Some(depot);
        self.gls_service_type = service;
        Ok(())
    }

    /// 標籤上的出貨日期
    pub fn shipping_date(&self) -> NaiveDate {
        self.effective_date.unwrap_or(self.planned_date)
    }
}
