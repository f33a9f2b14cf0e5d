//! 出貨標籤產生器

use gls_core::GlsError;
use gls_parcel::{DigitSource, ParcelNumber, ParcelNumberGenerator};

use crate::client::CarrierClient;
use crate::request::LabelRequest;
use crate::shipment::{Package, ShipmentOut};
use crate::store::PackageStore;
use crate::{LabelRun, PackageLabel};

/// 每個包裹生成包裹號的最大嘗試次數
const MAX_PARCEL_NUMBER_ATTEMPTS: usize = 10;

/// 出貨標籤產生器
pub struct ShipmentLabeler<C, S, D>
where
    C: CarrierClient,
    S: PackageStore,
    D: DigitSource,
{
    /// 承運商 API 用戶端
    client: C,

    /// 包裹儲存
    store: S,

    /// 包裹號生成器
    generator: ParcelNumberGenerator<D>,
}

impl<C, S, D> ShipmentLabeler<C, S, D>
where
    C: CarrierClient,
    S: PackageStore,
    D: DigitSource,
{
    /// 創建新的標籤產生器
    pub fn new(client: C, store: S, generator: ParcelNumberGenerator<D>) -> Self {
        Self {
            client,
            store,
            generator,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 拆解為內部元件
    pub fn into_parts(self) -> (C, S, ParcelNumberGenerator<D>) {
        (self.client, self.store, self.generator)
    }

    /// 為出貨單的每個包裹產生 GLS 標籤
    ///
    /// 已有追蹤號的包裹不會重複請求；已有包裹號的包裹保留原號碼。
    /// 提交前先向儲存層確認包裹號未被佔用，碰撞時重新生成。
    /// 任何錯誤都會中止並原樣返回；儲存失敗時還原該包裹的包裹號與追蹤號。
    pub fn make_labels(&mut self, shipment: &mut ShipmentOut) -> gls_core::Result<LabelRun> {
        tracing::info!(
            "開始產生 GLS 標籤：出貨單 {}，包裹 {} 個",
            shipment.reference,
            shipment.packages.len()
        );

        // Step 1: 狀態檢查
        if !shipment.state.allows_labels() {
            return Err(GlsError::InvalidState {
                shipment: shipment.reference.clone(),
                state: shipment.state.to_string(),
            });
        }

        // Step 2: 承運商檢查
        let config = match &shipment.carrier {
            Some(carrier) if carrier.is_gls() => carrier.clone(),
            _ => return Err(GlsError::WrongCarrier("GLS".to_string())),
        };

        // Step 3: 站點編號
        let depot = shipment.gls_depot_number.clone().ok_or_else(|| {
            GlsError::InvalidDepotNumber(format!("出貨單 {} 未設定站點編號", shipment.reference))
        })?;
        let service = shipment.gls_service_type;

        // Step 4: 逐包裹處理
        let mut run = LabelRun::new(shipment.reference.clone());
        let mut packages = std::mem::take(&mut shipment.packages);

        let mut outcome = Ok(());
        for package in packages.iter_mut() {
            match self.label_package(shipment, package, &depot, service, &config) {
                Ok(label) => run.labels.push(label),
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }

        // 無論成功與否都放回包裹
        shipment.packages = packages;
        outcome?;

        tracing::info!(
            "GLS 標籤完成：出貨單 {}，新請求 {} 筆",
            run.shipment_reference,
            run.requested_count()
        );

        Ok(run)
    }

    /// 單包裹處理
    fn label_package(
        &mut self,
        shipment: &ShipmentOut,
        package: &mut Package,
        depot: &gls_core::DepotNumber,
        service: gls_core::ServiceType,
        config: &gls_core::CarrierConfig,
    ) -> gls_core::Result<PackageLabel> {
        let previous_number = package.parcel_number.clone();
        let previous_tracking = package.tracking_number.clone();
        let labeled = package.tracking_number.is_some();

        let parcel_number = match package.parcel_number.clone() {
            Some(number) if labeled => number,
            Some(number) if !self.store.is_parcel_number_taken(&number, &package.id)? => number,
            _ => {
                let number = self.fresh_parcel_number(package, depot, service)?;
                package.parcel_number = Some(number.clone());
                number
            }
        };

        let (tracking_number, requested) = match package.tracking_number.clone() {
            Some(tracking) => {
                tracing::debug!("包裹 {} 已有追蹤號，略過", package.code);
                (tracking, false)
            }
            None => {
                let request = LabelRequest::assemble(shipment, package, config)?;
                tracing::debug!("提交標籤請求：包裹 {}，包裹號 {}", package.code, parcel_number);

                let response = self.client.submit(&request).map_err(|err| {
                    tracing::warn!("承運商拒絕包裹 {} 的標籤請求: {}", package.code, err);
                    err
                })?;
                let tracking = response.tracking_number()?;
                package.tracking_number = Some(tracking.clone());
                (tracking, true)
            }
        };

        // 儲存失敗時記憶體須與儲存層一致
        if let Err(err) = self.store.save(package) {
            tracing::warn!("包裹 {} 儲存失敗，還原包裹號: {}", package.code, err);
            package.parcel_number = previous_number;
            package.tracking_number = previous_tracking;
            return Err(err);
        }

        Ok(PackageLabel {
            package_id: package.id,
            package_code: package.code.clone(),
            parcel_number,
            tracking_number,
            requested,
        })
    }

    /// 生成未被佔用的包裹號
    fn fresh_parcel_number(
        &mut self,
        package: &Package,
        depot: &gls_core::DepotNumber,
        service: gls_core::ServiceType,
    ) -> gls_core::Result<ParcelNumber> {
        let mut last = String::new();
        for _ in 0..MAX_PARCEL_NUMBER_ATTEMPTS {
            let number = self.generator.generate(depot, service)?;
            if !self.store.is_parcel_number_taken(&number, &package.id)? {
                return Ok(number);
            }
            tracing::warn!("包裹號 {} 已被佔用，重新生成", number);
            last = number.to_string();
        }
        Err(GlsError::DuplicateParcelNumber(last))
    }
}
