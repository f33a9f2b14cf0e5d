//! 包裹儲存介面

use std::collections::HashMap;

use gls_core::GlsError;
use gls_parcel::ParcelNumber;
use uuid::Uuid;

use crate::shipment::Package;

/// 包裹儲存（由 ERP 持久層實作，需對包裹號建立唯一約束）
pub trait PackageStore {
    /// 儲存包裹
    fn save(&mut self, package: &Package) -> gls_core::Result<()>;

    /// 包裹號是否已被其他包裹佔用
    fn is_parcel_number_taken(
        &self,
        number: &ParcelNumber,
        package_id: &Uuid,
    ) -> gls_core::Result<bool>;
}

impl<S: PackageStore + ?Sized> PackageStore for &mut S {
    fn save(&mut self, package: &Package) -> gls_core::Result<()> {
        (**self).save(package)
    }

    fn is_parcel_number_taken(
        &self,
        number: &ParcelNumber,
        package_id: &Uuid,
    ) -> gls_core::Result<bool> {
        (**self).is_parcel_number_taken(number, package_id)
    }
}

/// 記憶體內包裹儲存（包裹號唯一）
#[derive(Debug, Default)]
pub struct InMemoryPackageStore {
    packages: HashMap<Uuid, Package>,
}

impl InMemoryPackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Package> {
        self.packages.get(id)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageStore for InMemoryPackageStore {
    fn save(&mut self, package: &Package) -> gls_core::Result<()> {
        if let Some(number) = &package.parcel_number {
            if self.is_parcel_number_taken(number, &package.id)? {
                return Err(GlsError::DuplicateParcelNumber(number.to_string()));
            }
        }

        self.packages.insert(package.id, package.clone());
        Ok(())
    }

    fn is_parcel_number_taken(
        &self,
        number: &ParcelNumber,
        package_id: &Uuid,
    ) -> gls_core::Result<bool> {
        Ok(self
            .packages
            .values()
            .any(|other| &other.id != package_id && other.parcel_number.as_ref() == Some(number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipment::WeightUom;
    use rust_decimal::Decimal;

    fn package(number: &str) -> Package {
        Package::new("PKG".to_string(), Decimal::ONE, WeightUom::Kilogram)
            .with_parcel_number(ParcelNumber::parse(number).unwrap())
    }

    #[test]
    fn test_save_and_update() {
        let mut store = InMemoryPackageStore::new();
        let mut pkg = package("121034567891");

        store.save(&pkg).unwrap();
        pkg.tracking_number = Some("ZX1".to_string());
        store.save(&pkg).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&pkg.id).unwrap().tracking_number.as_deref(),
            Some("ZX1")
        );
    }

    #[test]
    fn test_duplicate_parcel_number_rejected() {
        let mut store = InMemoryPackageStore::new();
        store.save(&package("121034567891")).unwrap();

        let err = store.save(&package("121034567891")).unwrap_err();
        assert!(matches!(err, GlsError::DuplicateParcelNumber(n) if n == "121034567891"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_parcel_number_taken_ignores_own_package() {
        let mut store = InMemoryPackageStore::new();
        let pkg = package("121034567891");
        store.save(&pkg).unwrap();

        let number = pkg.parcel_number.clone().unwrap();
        assert!(!store.is_parcel_number_taken(&number, &pkg.id).unwrap());
        assert!(store.is_parcel_number_taken(&number, &Uuid::new_v4()).unwrap());

        let free = ParcelNumber::parse("121000000070").unwrap();
        assert!(!store.is_parcel_number_taken(&free, &Uuid::new_v4()).unwrap());
    }

    #[test]
    fn test_packages_without_number_do_not_collide() {
        let mut store = InMemoryPackageStore::new();
        for _ in 0..3 {
            store
                .save(&Package::new("PKG".to_string(), Decimal::ONE, WeightUom::Kilogram))
                .unwrap();
        }
        assert_eq!(store.len(), 3);
    }
}
