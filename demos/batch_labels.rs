//! 出貨單標籤完整範例
//!
//! 展示從出貨單到追蹤號回寫的完整流程（GLS API 以離線模擬代替）

use chrono::NaiveDate;
use gls::*;
use rust_decimal::Decimal;

/// 離線模擬的 GLS API
struct OfflineGlsApi;

impl CarrierClient for OfflineGlsApi {
    fn submit(&self, request: &LabelRequest) -> gls::Result<CarrierResponse> {
        Ok(CarrierResponse::default()
            .with_value("T8913", &format!("ZT{}", request.parcel_number.serial()))
            .with_value("T8700", &request.location))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== GLS Label Example =====\n");

    // 步驟 1: 承運商配置
    println!("[1] Configure Carrier");
    let carrier = CarrierConfig::gls(
        "GLS-ESSEN".to_string(),
        ConsignorProfile::new(15082, "Essen".to_string()),
        ConsigneeIdentification::new(4600, 800018406),
    )
    .with_account(
        "460/1234".to_string(),
        "2760001234".to_string(),
        "DE 460".to_string(),
    )
    .with_default_depot_number(DepotNumber::parse("46")?)
    .with_default_service_type(ServiceType::ExpressParcel);
    carrier.validate()?;
    println!("    Carrier: {} ({})\n", carrier.carrier_id, carrier.default_service_type);

    // 步驟 2: 建立出貨單
    println!("[2] Create Shipment");
    let customer = Party::new("Kunde GmbH".to_string()).with_address(Address::new(
        "Kundenweg 5".to_string(),
        "10115".to_string(),
        "Berlin".to_string(),
        "DE".to_string(),
    ));
    let company = Party::new("Openlabs".to_string()).with_address(Address::new(
        "Hauptstr. 1".to_string(),
        "45127".to_string(),
        "Essen".to_string(),
        "DE".to_string(),
    ));

    let mut shipment = ShipmentOut::new(
        "CS-2025-001".to_string(),
        customer,
        company,
        NaiveDate::from_ymd_opt(2025, 11, 3).ok_or_else(|| anyhow::anyhow!("無效的日期"))?,
    )
    .with_state(ShipmentState::Packed)
    .with_package(Package::new("BOX-1".to_string(), Decimal::new(35, 1), WeightUom::Kilogram))
    .with_package(Package::new("BOX-2".to_string(), Decimal::from(800), WeightUom::Gram));
    shipment.apply_carrier(carrier);
    println!("    Packages: {}\n", shipment.packages.len());

    // 步驟 3: 產生標籤
    println!("[3] Make Labels");
    let mut labeler = ShipmentLabeler::new(
        OfflineGlsApi,
        InMemoryPackageStore::new(),
        ParcelNumberGenerator::with_thread_rng(),
    );
    let run = labeler.make_labels(&mut shipment)?;

    // 步驟 4: 輸出結果
    println!("\n[4] Results");
    for label in &run.labels {
        println!(
            "    {} → 包裹號 {}，追蹤號 {}",
            label.package_code, label.parcel_number, label.tracking_number
        );
    }

    Ok(())
}
