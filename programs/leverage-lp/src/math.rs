use anchor_lang::prelude::*;
use ethnum::I256;
use std::fmt;
use std::str::FromStr;

use crate::errors::LeverageError;

/// Fractional digits carried by [`Dec`]
pub const PRECISION: u32 = 18;

/// Fractional digits carried by [`BigDec`]
pub const BIG_PRECISION: u32 = 36;

/// Scale factor for [`Dec`] (1e18)
pub const DEC_SCALE: i128 = 1_000_000_000_000_000_000;

const BIG_SCALE: I256 = I256::new(1_000_000_000_000_000_000_000_000_000_000_000_000);

/// Widening factor from [`Dec`] to [`BigDec`] (1e18)
const WIDEN_SCALE: I256 = I256::new(DEC_SCALE);

/// Fixed-point decimal with 18 fractional digits.
///
/// This is the storage precision for every ratio in [`crate::state::Params`].
/// An unset value is modelled as `Option<Dec>::None`, never as zero.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Dec(i128);

impl Dec {
    /// Build from a mantissa already scaled by 1e18
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i128 {
        self.0
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn one() -> Self {
        Self(DEC_SCALE)
    }

    pub const fn from_int(value: i64) -> Self {
        Self(value as i128 * DEC_SCALE)
    }

    /// `value * 10^-prec`, e.g. `new_with_prec(11, 1)` is 1.1.
    ///
    /// `prec` must not exceed [`PRECISION`]; in a `const` item a larger
    /// value is a compile error.
    pub const fn new_with_prec(value: i64, prec: u32) -> Self {
        Self(value as i128 * 10i128.pow(PRECISION - prec))
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Dec {
    type Err = anchor_lang::error::Error;

    /// Parses `[-]digits[.digits]` with at most 18 fractional digits
    fn from_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => {
                require!(!frac_part.is_empty(), LeverageError::InvalidDecimal);
                (int_part, frac_part)
            }
            None => (digits, ""),
        };

        require!(
            !int_part.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit()),
            LeverageError::InvalidDecimal
        );
        require!(
            frac_part.len() <= PRECISION as usize && frac_part.bytes().all(|b| b.is_ascii_digit()),
            LeverageError::InvalidDecimal
        );

        let mut raw: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            raw = raw
                .checked_mul(10)
                .and_then(|r| r.checked_add(i128::from(b - b'0')))
                .ok_or(LeverageError::InvalidDecimal)?;
        }
        let padding = 10i128.pow(PRECISION - frac_part.len() as u32);
        raw = raw
            .checked_mul(padding)
            .ok_or(LeverageError::InvalidDecimal)?;

        Ok(Self(if negative { -raw } else { raw }))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let scale = DEC_SCALE as u128;
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.{:018}", abs / scale, abs % scale)
    }
}

/// Fixed-point decimal with 36 fractional digits on a 256-bit mantissa.
///
/// Used for chained multiply/divide risk math so that intermediate rounding
/// stays well below the 1e-18 storage precision. Operations truncate toward
/// zero and return `None` on overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BigDec(I256);

impl BigDec {
    pub const fn zero() -> Self {
        Self(I256::ZERO)
    }

    pub const fn one() -> Self {
        Self(BIG_SCALE)
    }

    /// Lossless widening from storage precision
    pub fn from_dec(value: Dec) -> Self {
        Self(I256::new(value.raw()) * WIDEN_SCALE)
    }

    pub fn raw(&self) -> I256 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > I256::ZERO
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_mul(self, other: Self) -> Option<Self> {
        self.0
            .checked_mul(other.0)?
            .checked_div(BIG_SCALE)
            .map(Self)
    }

    pub fn checked_quo(self, other: Self) -> Option<Self> {
        self.0
            .checked_mul(BIG_SCALE)?
            .checked_div(other.0)
            .map(Self)
    }

    /// Narrow back to storage precision, truncating the extra 18 digits
    pub fn to_dec(self) -> Option<Dec> {
        let narrowed = self.0 / WIDEN_SCALE;
        if narrowed > I256::new(i128::MAX) || narrowed < I256::new(i128::MIN) {
            return None;
        }
        Some(Dec::from_raw(narrowed.as_i128()))
    }
}

impl From<Dec> for BigDec {
    fn from(value: Dec) -> Self {
        Self::from_dec(value)
    }
}
