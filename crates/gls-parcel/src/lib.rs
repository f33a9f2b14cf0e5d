//! # GLS Parcel
//!
//! 包裹號生成：檢查碼計算（Modulo 10+1）與 12 位包裹號組裝
//!
//! 包裹號格式：
//!
//! | 位數 | 內容 |
//! |---|---|
//! | 1-2 | 出貨站點編號 |
//! | 3-4 | 服務/產品代碼 |
//! | 5-11 | 7 位隨機流水碼 |
//! | 12 | 檢查碼 |

pub mod check_digit;
pub mod generator;
pub mod parcel_number;

// Re-export 主要類型
pub use check_digit::{check_digit, check_digit_char};
pub use generator::{DigitSource, FixedDigits, ParcelNumberGenerator, RngDigits};
pub use parcel_number::ParcelNumber;

/// 檢查碼計算的輸入長度（站點 + 服務 + 流水碼）
pub const BASE_LEN: usize = 11;

/// 隨機流水碼長度
pub const SERIAL_LEN: usize = 7;

/// 完整包裹號長度
pub const PARCEL_NUMBER_LEN: usize = 12;
