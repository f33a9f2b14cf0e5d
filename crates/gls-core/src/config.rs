//! 承運商配置模型

use serde::{Deserialize, Serialize};

use crate::{DepotNumber, GlsError, ServiceType};

/// 承運商運費計算方式（只有 GLS 承運商會走標籤流程）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierCostMethod {
    /// GLS
    Gls,
    /// 其他承運商
    Other,
}

/// 上報給 GLS 的軟體資訊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareInfo {
    pub name: String,
    pub version: String,
}

impl Default for SoftwareInfo {
    fn default() -> Self {
        Self {
            name: "Rust".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// 寄件方（公司）在 GLS 的識別資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsignorProfile {
    /// GLS 客戶編號
    pub customer_number: u64,

    /// 標籤上的寄件方標題
    pub label: String,

    /// 寄件方附註
    pub consignor: String,
}

impl ConsignorProfile {
    pub fn new(customer_number: u64, consignor: String) -> Self {
        Self {
            customer_number,
            label: "Empfanger".to_string(),
            consignor,
        }
    }
}

/// 收件方識別資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsigneeIdentification {
    /// 客戶編號標題
    pub customer_number_label: String,

    /// 客戶編號
    pub customer_number: u64,

    /// 證件類型標題
    pub id_type: String,

    /// 證件號碼
    pub id_value: u64,
}

impl ConsigneeIdentification {
    pub fn new(customer_number: u64, id_value: u64) -> Self {
        Self {
            customer_number_label: "Kd-Nr".to_string(),
            customer_number,
            id_type: "ID-Nr".to_string(),
            id_value,
        }
    }
}

/// 承運商配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// 承運商ID
    pub carrier_id: String,

    /// 運費計算方式
    pub cost_method: CarrierCostMethod,

    /// GLS 合約號
    #[serde(default)]
    pub gls_contract: String,

    /// GLS 客戶ID
    #[serde(default)]
    pub gls_customer_id: String,

    /// GLS 發貨地點
    #[serde(default)]
    pub gls_location: String,

    /// 預設站點編號（選擇此承運商時帶入出貨單）
    #[serde(default)]
    pub default_depot_number: Option<DepotNumber>,

    /// 預設服務類型
    #[serde(default)]
    pub default_service_type: ServiceType,

    /// 軟體資訊
    #[serde(default)]
    pub software: SoftwareInfo,

    /// 寄件方資料
    pub consignor: ConsignorProfile,

    /// 收件方識別資料
    pub consignee_identification: ConsigneeIdentification,
}

impl CarrierConfig {
    /// 創建新的 GLS 承運商配置
    pub fn gls(
        carrier_id: String,
        consignor: ConsignorProfile,
        consignee_identification: ConsigneeIdentification,
    ) -> Self {
        Self {
            carrier_id,
            cost_method: CarrierCostMethod::Gls,
            gls_contract: String::new(),
            gls_customer_id: String::new(),
            gls_location: String::new(),
            default_depot_number: None,
            default_service_type: ServiceType::default(),
            software: SoftwareInfo::default(),
            consignor,
            consignee_identification,
        }
    }

    /// 從 JSON 載入配置並驗證
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置運費計算方式
    pub fn with_cost_method(mut self, cost_method: CarrierCostMethod) -> Self {
        self.cost_method = cost_method;
        self
    }

    /// 建構器模式：設置 GLS 帳戶資料
    pub fn with_account(mut self, contract: String, customer_id: String, location: String) -> Self {
        self.gls_contract = contract;
        self.gls_customer_id = customer_id;
        self.gls_location = location;
        self
    }

    /// 建構器模式：設置預設站點編號
    pub fn with_default_depot_number(mut self, depot: DepotNumber) -> Self {
        self.default_depot_number = Some(depot);
        self
    }

    /// 建構器模式：設置預設服務類型
    pub fn with_default_service_type(mut self, service: ServiceType) -> Self {
        self.default_service_type = service;
        self
    }

    /// 建構器模式：設置軟體資訊
    pub fn with_software(mut self, name: String, version: String) -> Self {
        self.software = SoftwareInfo { name, version };
        self
    }

    /// 是否為 GLS 承運商
    pub fn is_gls(&self) -> bool {
        self.cost_method == CarrierCostMethod::Gls
    }

    /// 驗證配置
    pub fn validate(&self) -> crate::Result<()> {
        if !self.is_gls() {
            return Ok(());
        }

        let missing: Vec<&str> = [
            ("gls_contract", &self.gls_contract),
            ("gls_customer_id", &self.gls_customer_id),
            ("gls_location", &self.gls_location),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            return Err(GlsError::InvalidConfig(format!(
                "承運商 {} 缺少欄位: {}",
                self.carrier_id,
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> CarrierConfig {
        CarrierConfig::gls(
            "GLS-DE".to_string(),
            ConsignorProfile::new(15082, "Essen".to_string()),
            ConsigneeIdentification::new(4600, 800018406),
        )
    }

    #[test]
    fn test_create_config() {
        let config = sample_config();

        assert_eq!(config.carrier_id, "GLS-DE");
        assert!(config.is_gls());
        assert_eq!(config.default_service_type, ServiceType::EuroBusinessParcel);
        assert_eq!(config.consignor.label, "Empfanger");
        assert_eq!(config.consignee_identification.customer_number_label, "Kd-Nr");
        assert_eq!(config.consignee_identification.id_type, "ID-Nr");
    }

    #[test]
    fn test_config_builder() {
        let config = sample_config()
            .with_account("C-1".to_string(), "CUST-9".to_string(), "DE 460".to_string())
            .with_default_depot_number(DepotNumber::parse("46").unwrap())
            .with_default_service_type(ServiceType::Guaranteed24)
            .with_software("ERP".to_string(), "5.0".to_string());

        assert_eq!(config.gls_contract, "C-1");
        assert_eq!(config.default_depot_number.as_ref().unwrap().as_str(), "46");
        assert_eq!(config.default_service_type, ServiceType::Guaranteed24);
        assert_eq!(config.software.name, "ERP");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_account() {
        let err = sample_config()
            .with_account("C-1".to_string(), String::new(), " ".to_string())
            .validate()
            .unwrap_err();

        match err {
            GlsError::InvalidConfig(msg) => {
                assert!(msg.contains("gls_customer_id"));
                assert!(msg.contains("gls_location"));
                assert!(!msg.contains("gls_contract"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_gls_carrier_skips_validation() {
        let config = sample_config().with_cost_method(CarrierCostMethod::Other);
        assert!(!config.is_gls());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "carrier_id": "GLS-DE",
            "cost_method": "gls",
            "gls_contract": "C-1",
            "gls_customer_id": "CUST-9",
            "gls_location": "DE 460",
            "default_depot_number": "46",
            "default_service_type": "express_parcel",
            "consignor": { "customer_number": 15082, "label": "Empfanger", "consignor": "Essen" },
            "consignee_identification": {
                "customer_number_label": "Kd-Nr",
                "customer_number": 4600,
                "id_type": "ID-Nr",
                "id_value": 800018406
            }
        }"#;

        let config = CarrierConfig::from_json(json).unwrap();
        assert_eq!(config.default_service_type, ServiceType::ExpressParcel);
        assert_eq!(config.default_depot_number.unwrap().as_str(), "46");
        assert_eq!(config.software, SoftwareInfo::default());
    }

    #[test]
    fn test_from_json_rejects_bad_depot() {
        let json = r#"{
            "carrier_id": "GLS-DE",
            "cost_method": "gls",
            "gls_contract": "C-1",
            "gls_customer_id": "CUST-9",
            "gls_location": "DE 460",
            "default_depot_number": "460",
            "consignor": { "customer_number": 1, "label": "x", "consignor": "y" },
            "consignee_identification": {
                "customer_number_label": "Kd-Nr",
                "customer_number": 1,
                "id_type": "ID-Nr",
                "id_value": 1
            }
        }"#;

        assert!(matches!(
            CarrierConfig::from_json(json),
            Err(GlsError::Serialization(_))
        ));
    }
}
