//! 集成測試

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::NaiveDate;
use gls::parcel::FixedDigits;
use gls::*;
use rstest::rstest;
use rust_decimal::Decimal;

/// 模擬 GLS API：依包裹號產生追蹤號並記錄請求
#[derive(Default)]
struct FakeGlsApi {
    requests: RefCell<Vec<LabelRequest>>,
}

impl CarrierClient for FakeGlsApi {
    fn submit(&self, request: &LabelRequest) -> gls::Result<CarrierResponse> {
        self.requests.borrow_mut().push(request.clone());
        Ok(CarrierResponse::default()
            .with_value("T8913", &format!("ZT{}", request.parcel_number))
            .with_value("T8700", &request.location))
    }
}

fn gls_carrier() -> CarrierConfig {
    let json = r#"{
        "carrier_id": "GLS-ESSEN",
        "cost_method": "gls",
        "gls_contract": "460/1234",
        "gls_customer_id": "2760001234",
        "gls_location": "DE 460",
        "default_depot_number": "46",
        "default_service_type": "euro_business_parcel",
        "software": { "name": "ERP", "version": "3.4" },
        "consignor": { "customer_number": 15082, "label": "Empfanger", "consignor": "Essen" },
        "consignee_identification": {
            "customer_number_label": "Kd-Nr",
            "customer_number": 4600,
            "id_type": "ID-Nr",
            "id_value": 800018406
        }
    }"#;
    CarrierConfig::from_json(json).unwrap()
}

fn packed_shipment(package_count: usize) -> ShipmentOut {
    let customer = Party::new("Kunde GmbH".to_string()).with_address(Address::new(
        "Kundenweg 5".to_string(),
        "10115".to_string(),
        "Berlin".to_string(),
        "DE".to_string(),
    ));
    let company = Party::new("Openlabs".to_string()).with_address(
        Address::new(
            "Hauptstr. 1".to_string(),
            "45127".to_string(),
            "Essen".to_string(),
            "DE".to_string(),
        )
        .with_name("Versand".to_string()),
    );

    let mut shipment = ShipmentOut::new(
        "CS-2025-001".to_string(),
        customer,
        company,
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
    )
    .with_state(ShipmentState::Packed);

    for i in 0..package_count {
        shipment = shipment.with_package(Package::new(
            format!("PKG-{:03}", i + 1),
            Decimal::from(1200 + i as i64 * 100),
            WeightUom::Gram,
        ));
    }

    shipment
}

#[test]
fn test_golden_parcel_number() {
    // 站點 12 + 歐洲商務包裹 10 + 流水碼 3456789 → 檢查碼 1
    assert_eq!(check_digit("12103456789").unwrap(), 1);

    let number = ParcelNumber::assemble(
        &DepotNumber::parse("12").unwrap(),
        ServiceType::EuroBusinessParcel,
        "3456789",
    )
    .unwrap();
    assert_eq!(number.as_str(), "121034567891");
}

#[rstest]
#[case("12", "unknown_service", "service")]
#[case("1", "euro_business_parcel", "depot")]
#[case("A2", "guaranteed_24", "depot")]
fn test_generator_rejects_bad_input(
    #[case] depot: &str,
    #[case] service: &str,
    #[case] kind: &str,
) {
    let mut generator = ParcelNumberGenerator::with_thread_rng();
    let err = generator.generate_from_keys(depot, service).unwrap_err();

    match kind {
        "service" => assert!(matches!(err, GlsError::InvalidServiceType(_))),
        _ => assert!(matches!(err, GlsError::InvalidDepotNumber(_))),
    }
}

#[test]
fn test_full_label_run() {
    // 1. 出貨單：選擇 GLS 承運商，帶入預設站點與服務
    let mut shipment = packed_shipment(3);
    shipment.apply_carrier(gls_carrier());
    assert!(shipment.is_gls_shipping());
    assert_eq!(shipment.gls_depot_number.as_ref().unwrap().as_str(), "46");

    // 2. 精靈步驟：改用 24 小時保證送達
    shipment
        .set_gls_options(DepotNumber::parse("46").unwrap(), ServiceType::Guaranteed24)
        .unwrap();

    // 3. 產生標籤
    let api = FakeGlsApi::default();
    let mut labeler = ShipmentLabeler::new(
        &api,
        InMemoryPackageStore::new(),
        ParcelNumberGenerator::with_thread_rng(),
    );
    let run = labeler.make_labels(&mut shipment).unwrap();

    // 4. 驗證結果
    assert_eq!(run.shipment_reference, "CS-2025-001");
    assert_eq!(run.labels.len(), 3);
    assert_eq!(run.requested_count(), 3);

    let numbers: HashSet<&str> = run.labels.iter().map(|l| l.parcel_number.as_str()).collect();
    assert_eq!(numbers.len(), 3);

    for (label, package) in run.labels.iter().zip(&shipment.packages) {
        assert_eq!(label.package_id, package.id);
        assert!(label.parcel_number.as_str().starts_with("4675"));
        assert!(ParcelNumber::parse(label.parcel_number.as_str()).is_ok());
        assert_eq!(label.tracking_number, format!("ZT{}", label.parcel_number));
        assert_eq!(package.tracking_number.as_deref(), Some(label.tracking_number.as_str()));
        assert!(labeler.store().get(&package.id).is_some());
    }

    let requests = api.requests.borrow();
    assert_eq!(requests[0].parcel_weight, Decimal::new(12, 1));
    assert_eq!(requests[0].software.name, "ERP");
    assert_eq!(requests[0].consignor.name2.as_deref(), Some("Versand"));
    assert_eq!(requests[0].consignee.zip, "10115");
    assert_eq!(requests[0].location, "DE 460");
}

#[test]
fn test_rerun_does_not_resubmit() {
    let mut shipment = packed_shipment(2);
    shipment.apply_carrier(gls_carrier());

    let api = FakeGlsApi::default();
    let mut labeler = ShipmentLabeler::new(
        &api,
        InMemoryPackageStore::new(),
        ParcelNumberGenerator::new(FixedDigits::new("12345677654321").unwrap()),
    );

    let first = labeler.make_labels(&mut shipment).unwrap();
    let second = labeler.make_labels(&mut shipment).unwrap();

    assert_eq!(first.requested_count(), 2);
    assert_eq!(second.requested_count(), 0);
    assert_eq!(api.requests.borrow().len(), 2);
    assert_eq!(first.tracking_numbers(), second.tracking_numbers());
    assert_eq!(
        first.labels[0].parcel_number,
        second.labels[0].parcel_number
    );
}

#[test]
fn test_draft_shipment_is_rejected() {
    let mut shipment = packed_shipment(1).with_state(ShipmentState::Draft);
    shipment.apply_carrier(gls_carrier());

    let api = FakeGlsApi::default();
    let mut labeler = ShipmentLabeler::new(
        &api,
        InMemoryPackageStore::new(),
        ParcelNumberGenerator::with_thread_rng(),
    );

    let err = labeler.make_labels(&mut shipment).unwrap_err();
    assert!(matches!(err, GlsError::InvalidState { .. }));
    assert!(api.requests.borrow().is_empty());
}

#[test]
fn test_request_is_serializable() {
    let mut shipment = packed_shipment(1);
    shipment.apply_carrier(gls_carrier());
    shipment.packages[0].parcel_number = Some(ParcelNumber::parse("461034567898").unwrap());

    let config = shipment.carrier.clone().unwrap();
    let request = LabelRequest::assemble(&shipment, &shipment.packages[0], &config).unwrap();
    let json = request.to_json().unwrap();

    assert!(json.contains("\"gls_contract\":\"460/1234\""));
    assert!(json.contains("\"quantity\":1"));
}
