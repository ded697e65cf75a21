//! Conversion between decimal indices and fixed-width base-4 digit strings
//!
//! Barcode panels are enumerated by decimal index; the encoder consumes the
//! index as a most-significant-first list of base-4 digits.

use crate::{
    error::{DomainError, ParameterError},
    Result,
};

/// Number of symbols in the quaternary alphabet
pub const BASE: u64 = 4;

/// Converts `index` into exactly `width` base-4 digits, most significant first.
///
/// Indices that need more than `width` digits are rejected.
///
/// # Examples
///
/// ```
/// use hamstring::encode_base4;
///
/// assert_eq!(encode_base4(22, 4).unwrap(), vec![0, 1, 1, 2]);
/// assert!(encode_base4(256, 4).is_err());
/// ```
pub fn encode_base4(index: u64, width: usize) -> Result<Vec<u8>> {
    if width == 0 {
        return Err(ParameterError::InvalidWidth.into());
    }

    // 4^width only overflows u64 when every u64 fits
    let fits = u32::try_from(width)
        .ok()
        .and_then(|w| BASE.checked_pow(w))
        .is_none_or(|limit| index < limit);
    if !fits {
        return Err(DomainError::IndexOverflow { index, width }.into());
    }

    let mut digits = Vec::with_capacity(width);
    let mut n = index;
    for _ in 0..width {
        digits.push((n % BASE) as u8);
        n /= BASE;
    }
    digits.reverse();
    Ok(digits)
}

/// Converts most-significant-first base-4 digits back into a decimal index.
pub fn decode_base4(digits: &[u8]) -> Result<u64> {
    digits.iter().try_fold(0u64, |acc, &d| -> Result<u64> {
        if u64::from(d) >= BASE {
            return Err(ParameterError::InvalidSymbol(d).into());
        }
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or_else(|| {
                anyhow::anyhow!("{} base-4 digits overflow a 64-bit index", digits.len()).into()
            })
    })
}
