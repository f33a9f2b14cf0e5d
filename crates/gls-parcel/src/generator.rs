//! 包裹號生成器

use gls_core::{DepotNumber, GlsError, ServiceType};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::{ParcelNumber, SERIAL_LEN};

/// 隨機數字來源
pub trait DigitSource {
    /// 產生一個 0-9 的數字
    fn next_digit(&mut self) -> u8;
}

/// 以 `rand::Rng` 為基礎的均勻隨機數字來源
#[derive(Debug, Clone)]
pub struct RngDigits<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDigits<ThreadRng> {
    /// 使用執行緒本地亂數產生器
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for RngDigits<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> DigitSource for RngDigits<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..10)
    }
}

/// 固定數字序列，循環重播
///
/// 僅用於測試與重現既有包裹號；正式環境請使用 [`RngDigits`]。
#[derive(Debug, Clone)]
pub struct FixedDigits {
    digits: Vec<u8>,
    position: usize,
}

impl FixedDigits {
    /// 由數字字串建立（不可為空，只接受 0-9）
    pub fn new(digits: &str) -> gls_core::Result<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GlsError::InvalidConfig(format!(
                "固定數字序列必須為非空的數字字串: {digits:?}"
            )));
        }

        Ok(Self {
            digits: digits.bytes().map(|b| b - b'0').collect(),
            position: 0,
        })
    }
}

impl DigitSource for FixedDigits {
    fn next_digit(&mut self) -> u8 {
        let digit = self.digits[self.position % self.digits.len()];
        self.position += 1;
        digit
    }
}

/// 包裹號生成器
///
/// 不保證唯一性：7 位流水碼的碰撞交由儲存層的唯一約束拒絕。
pub struct ParcelNumberGenerator<D: DigitSource> {
    source: D,
}

impl ParcelNumberGenerator<RngDigits<ThreadRng>> {
    /// 使用執行緒本地亂數的生成器
    pub fn with_thread_rng() -> Self {
        Self::new(RngDigits::thread())
    }
}

impl<D: DigitSource> ParcelNumberGenerator<D> {
    /// 創建新的生成器
    pub fn new(source: D) -> Self {
        Self { source }
    }

    /// 生成完整包裹號
    pub fn generate(
        &mut self,
        depot: &DepotNumber,
        service: ServiceType,
    ) -> gls_core::Result<ParcelNumber> {
        let serial = self.random_serial();
        let number = ParcelNumber::assemble(depot, service, &serial)?;

        tracing::debug!(
            "生成包裹號 {}（站點 {}，服務 {}）",
            number,
            depot,
            service.code()
        );

        Ok(number)
    }

    /// 以字串參數生成包裹號（先驗證站點與服務鍵值）
    pub fn generate_from_keys(
        &mut self,
        depot: &str,
        service: &str,
    ) -> gls_core::Result<ParcelNumber> {
        let service = ServiceType::from_key(service)?;
        let depot = DepotNumber::parse(depot)?;
        self.generate(&depot, service)
    }

    /// 產生 7 位隨機流水碼
    fn random_serial(&mut self) -> String {
        (0..SERIAL_LEN)
            .map(|_| char::from(b'0' + self.source.next_digit() % 10))
            .collect()
    }
}
