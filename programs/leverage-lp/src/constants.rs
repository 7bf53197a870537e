use crate::math::Dec;

/// Upper bound on positions processed per maintenance cycle
pub const MAX_PAGE_LIMIT: i64 = 10_000;

/// Maximum number of pool ids the params account can hold
pub const MAX_ENABLED_POOLS: usize = 64;

/// Seed for the params PDA
pub const PARAMS_SEED: &[u8] = b"leverage_params";

/// Default maximum leverage (10x)
pub const DEFAULT_LEVERAGE_MAX: Dec = Dec::from_int(10);

/// Default epoch length in blocks
pub const DEFAULT_EPOCH_LENGTH: i64 = 1;

/// Default global cap on open positions
pub const DEFAULT_MAX_OPEN_POSITIONS: i64 = 9999;

/// Default pool open threshold (0.2)
pub const DEFAULT_POOL_OPEN_THRESHOLD: Dec = Dec::new_with_prec(2, 1);

/// Default safety factor (1.1)
pub const DEFAULT_SAFETY_FACTOR: Dec = Dec::new_with_prec(11, 1);

pub const DEFAULT_WHITELISTING_ENABLED: bool = false;

pub const DEFAULT_FALLBACK_ENABLED: bool = true;

/// Default positions processed per block
pub const DEFAULT_NUMBER_PER_BLOCK: i64 = 1000;

/// Default exit buffer (0.05)
pub const DEFAULT_EXIT_BUFFER: Dec = Dec::new_with_prec(5, 2);

pub const DEFAULT_STOP_LOSS_ENABLED: bool = true;

/// Default liabilities factor (1.0)
pub const DEFAULT_LIABILITIES_FACTOR: Dec = Dec::one();
