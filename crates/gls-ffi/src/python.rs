//! Python 綁定實現

use gls_core::{GlsError, ServiceType};
use gls_parcel::{ParcelNumber, ParcelNumberGenerator, RngDigits};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 領域錯誤轉為 Python ValueError
fn to_py_err(err: GlsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// 計算 11 位基底的檢查碼
#[pyfunction]
pub fn check_digit(base: &str) -> PyResult<String> {
    gls_parcel::check_digit_char(base)
        .map(String::from)
        .map_err(to_py_err)
}

/// 生成包裹號（執行緒本地亂數）
#[pyfunction]
pub fn generate_parcel_number(depot_number: &str, service_type: &str) -> PyResult<String> {
    ParcelNumberGenerator::with_thread_rng()
        .generate_from_keys(depot_number, service_type)
        .map(String::from)
        .map_err(to_py_err)
}

/// 驗證包裹號（長度、數字與檢查碼）
#[pyfunction]
pub fn validate_parcel_number(parcel_number: &str) -> bool {
    ParcelNumber::parse(parcel_number).is_ok()
}

/// 所有服務類型：(鍵值, 顯示名稱, 產品代碼)
#[pyfunction]
pub fn service_types() -> Vec<(&'static str, &'static str, &'static str)> {
    ServiceType::ALL
        .iter()
        .map(|service| (service.key(), service.label(), service.code()))
        .collect()
}

/// Python 服務類型
#[pyclass(name = "ServiceType")]
#[derive(Clone)]
pub struct PyServiceType {
    inner: ServiceType,
}

#[pymethods]
impl PyServiceType {
    #[new]
    #[pyo3(signature = (key="euro_business_parcel"))]
    fn new(key: &str) -> PyResult<Self> {
        let inner = ServiceType::from_key(key).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn key(&self) -> &'static str {
        self.inner.key()
    }

    #[getter]
    fn label(&self) -> &'static str {
        self.inner.label()
    }

    #[getter]
    fn code(&self) -> &'static str {
        self.inner.code()
    }

    fn __repr__(&self) -> String {
        format!("ServiceType('{}')", self.inner.key())
    }
}

/// Python 包裹號生成器
#[pyclass(name = "ParcelNumberGenerator", unsendable)]
pub struct PyParcelNumberGenerator {
    inner: ParcelNumberGenerator<RngDigits<StdRng>>,
}

#[pymethods]
impl PyParcelNumberGenerator {
    /// `seed` 用於重現（例如測試資料），預設取系統熵
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: ParcelNumberGenerator::new(RngDigits::new(rng)),
        }
    }

    /// 生成包裹號
    fn generate(&mut self, depot_number: &str, service_type: &str) -> PyResult<String> {
        self.inner
            .generate_from_keys(depot_number, service_type)
            .map(String::from)
            .map_err(to_py_err)
    }
}
