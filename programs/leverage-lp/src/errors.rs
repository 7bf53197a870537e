use anchor_lang::prelude::*;

#[error_code]
pub enum LeverageError {
    #[msg("Leverage max must be set")]
    LeverageMaxMissing,

    #[msg("Leverage max must be greater than 1")]
    LeverageMaxTooLow,

    #[msg("Epoch length must be positive")]
    EpochLengthNotPositive,

    #[msg("Pool open threshold must be set")]
    PoolOpenThresholdMissing,

    #[msg("Pool open threshold must be positive")]
    PoolOpenThresholdNotPositive,

    #[msg("Safety factor must be set")]
    SafetyFactorMissing,

    #[msg("Safety factor must be positive")]
    SafetyFactorNotPositive,

    #[msg("Number of positions per block must not be negative")]
    NumberPerBlockNegative,

    #[msg("Number of positions per block exceeds page limit")]
    NumberPerBlockExceedsPageLimit,

    #[msg("Enabled pools must not contain duplicate values")]
    DuplicateEnabledPool,

    #[msg("Exit buffer must be set")]
    ExitBufferMissing,

    #[msg("Liabilities factor must be set")]
    LiabilitiesFactorMissing,

    #[msg("Liabilities factor must be positive")]
    LiabilitiesFactorNotPositive,

    #[msg("Liabilities factor must be less than or equal to 1")]
    LiabilitiesFactorAboveOne,

    #[msg("Too many enabled pools for the params account")]
    TooManyEnabledPools,

    #[msg("Invalid decimal string")]
    InvalidDecimal,

    #[msg("Unauthorized")]
    Unauthorized,
}
