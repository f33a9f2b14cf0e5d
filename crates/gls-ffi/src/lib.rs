//! # GLS FFI
//!
//! Python 綁定層（PyO3），供 ERP 模組直接產生與驗證包裹號

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn gls_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyParcelNumberGenerator>()?;
    m.add_class::<python::PyServiceType>()?;
    m.add_function(wrap_pyfunction!(python::check_digit, m)?)?;
    m.add_function(wrap_pyfunction!(python::generate_parcel_number, m)?)?;
    m.add_function(wrap_pyfunction!(python::validate_parcel_number, m)?)?;
    m.add_function(wrap_pyfunction!(python::service_types, m)?)?;
    Ok(())
}
