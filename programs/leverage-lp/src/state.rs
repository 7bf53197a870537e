use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LeverageError;
use crate::math::{BigDec, Dec};

/// Risk and operational parameters for leveraged liquidity positions.
///
/// Ratio fields are `Option<Dec>`: `None` is the unset state and is rejected
/// by [`Params::validate`], so it stays distinguishable from zero both in
/// memory and in the Borsh layout.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Maximum allowed position leverage
    pub leverage_max: Option<Dec>,
    /// Blocks between maintenance runs
    pub epoch_length: i64,
    /// Global cap on concurrently open positions
    pub max_open_positions: i64,
    /// Minimum pool liquidity ratio for opening new positions
    pub pool_open_threshold: Option<Dec>,
    /// Margin of safety applied in risk calculations
    pub safety_factor: Option<Dec>,
    /// Restrict positions to `enabled_pools`
    pub whitelisting_enabled: bool,
    pub fallback_enabled: bool,
    /// Positions processed per maintenance cycle
    pub number_per_block: i64,
    /// Pool ids eligible for leveraged positions
    pub enabled_pools: Vec<u64>,
    /// Buffer applied when exiting a position
    pub exit_buffer: Option<Dec>,
    pub stop_loss_enabled: bool,
    /// Scaling applied to liabilities in solvency checks
    pub liabilities_factor: Option<Dec>,
}

impl Params {
    /// Borsh size with `enabled_pools` at capacity
    pub const MAX_SIZE: usize = 17 + // leverage_max
        8 +  // epoch_length
        8 +  // max_open_positions
        17 + // pool_open_threshold
        17 + // safety_factor
        1 +  // whitelisting_enabled
        1 +  // fallback_enabled
        8 +  // number_per_block
        4 + 8 * MAX_ENABLED_POOLS + // enabled_pools
        17 + // exit_buffer
        1 +  // stop_loss_enabled
        17;  // liabilities_factor

    /// Genesis parameter set
    pub fn new() -> Self {
        Self {
            leverage_max: Some(DEFAULT_LEVERAGE_MAX),
            epoch_length: DEFAULT_EPOCH_LENGTH,
            max_open_positions: DEFAULT_MAX_OPEN_POSITIONS,
            pool_open_threshold: Some(DEFAULT_POOL_OPEN_THRESHOLD),
            safety_factor: Some(DEFAULT_SAFETY_FACTOR),
            whitelisting_enabled: DEFAULT_WHITELISTING_ENABLED,
            fallback_enabled: DEFAULT_FALLBACK_ENABLED,
            number_per_block: DEFAULT_NUMBER_PER_BLOCK,
            enabled_pools: Vec::new(),
            exit_buffer: Some(DEFAULT_EXIT_BUFFER),
            stop_loss_enabled: DEFAULT_STOP_LOSS_ENABLED,
            liabilities_factor: Some(DEFAULT_LIABILITIES_FACTOR),
        }
    }

    pub fn default_params() -> Self {
        Self::new()
    }

    pub fn big_dec_safety_factor(&self) -> Option<BigDec> {
        self.safety_factor.map(BigDec::from_dec)
    }

    pub fn big_dec_pool_open_threshold(&self) -> Option<BigDec> {
        self.pool_open_threshold.map(BigDec::from_dec)
    }

    pub fn big_dec_exit_buffer(&self) -> Option<BigDec> {
        self.exit_buffer.map(BigDec::from_dec)
    }

    pub fn is_pool_enabled(&self, pool_id: u64) -> bool {
        self.enabled_pools.contains(&pool_id)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

/// Committed parameter set for the protocol
#[account]
pub struct ParamsConfig {
    /// Authority allowed to replace the params
    pub authority: Pubkey,
    /// Current parameter set
    pub params: Params,
    /// Bump seed for the params PDA
    pub bump: u8,
    /// Reserved for future upgrades
    pub _reserved: [u8; 32],
}

impl ParamsConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        Params::MAX_SIZE + // params
        1 +  // bump
        32;  // _reserved

    pub fn initialize(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        let params = Params::new();
        params.validate()?;

        self.authority = authority;
        self.params = params;
        self.bump = bump;

        Ok(())
    }

    /// Validate `candidate` and replace the stored params as a whole.
    /// On error the stored params are left untouched.
    pub fn replace_params(&mut self, candidate: Params) -> Result<()> {
        candidate.validate()?;
        require_gte!(
            MAX_ENABLED_POOLS,
            candidate.enabled_pools.len(),
            LeverageError::TooManyEnabledPools
        );

        self.params = candidate;

        Ok(())
    }
}
