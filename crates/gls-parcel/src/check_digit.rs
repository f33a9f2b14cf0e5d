//! 檢查碼計算（Modulo 10+1）

use gls_core::GlsError;

use crate::BASE_LEN;

/// 計算 11 位包裹號基底的檢查碼
///
/// 從右往左編號（索引從 0 開始），偶數索引乘 3、奇數索引乘 1，
/// 總和加 1 後，取到下一個 10 的倍數的差值。
///
/// 加 1 後總和剛好為 10 的倍數時差值為 10，此時檢查碼為 0，
/// 保證結果永遠是單一位數。
///
/// # 範例
/// ```
/// # use gls_parcel::check_digit;
/// assert_eq!(check_digit("12103456789").unwrap(), 1);
/// assert_eq!(check_digit("00000000003").unwrap(), 0);
/// ```
pub fn check_digit(base: &str) -> gls_core::Result<u8> {
    if base.len() != BASE_LEN || !base.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GlsError::InvalidCheckInput(base.to_string()));
    }

    let mut sum: u32 = base
        .bytes()
        .rev()
        .enumerate()
        .map(|(idx, b)| {
            let value = u32::from(b - b'0');
            if idx % 2 == 0 {
                value * 3
            } else {
                value
            }
        })
        .sum();

    sum += 1;

    let next_multiple = (sum / 10 + 1) * 10;
    let gap = next_multiple - sum;

    Ok((gap % 10) as u8)
}

/// 計算檢查碼並以字元形式返回
pub fn check_digit_char(base: &str) -> gls_core::Result<char> {
    let digit = check_digit(base)?;
    Ok(char::from(b'0' + digit))
}
