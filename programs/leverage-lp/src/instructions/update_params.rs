use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LeverageError;
use crate::state::*;

/// Replace the committed params with a new set
///
/// The candidate is validated as a whole before it is stored. Any failure
/// aborts the instruction and the stored params stay as they were.
#[derive(Accounts)]
pub struct UpdateParams<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PARAMS_SEED],
        bump = params_config.bump,
        has_one = authority @ LeverageError::Unauthorized
    )]
    pub params_config: Account<'info, ParamsConfig>,
}

pub fn handler(ctx: Context<UpdateParams>, params: Params) -> Result<()> {
    let params_config = &mut ctx.accounts.params_config;

    params_config.replace_params(params)?;

    let committed = &params_config.params;
    msg!(
        "Leverage params updated: epoch_length={} number_per_block={} enabled_pools={}",
        committed.epoch_length,
        committed.number_per_block,
        committed.enabled_pools.len()
    );

    emit!(ParamsUpdated {
        params_config: params_config.key(),
        authority: ctx.accounts.authority.key(),
        epoch_length: committed.epoch_length,
        max_open_positions: committed.max_open_positions,
        number_per_block: committed.number_per_block,
        enabled_pool_count: committed.enabled_pools.len() as u16,
        whitelisting_enabled: committed.whitelisting_enabled,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct ParamsUpdated {
    pub params_config: Pubkey,
    pub authority: Pubkey,
    pub epoch_length: i64,
    pub max_open_positions: i64,
    pub number_per_block: i64,
    pub enabled_pool_count: u16,
    pub whitelisting_enabled: bool,
    pub timestamp: i64,
}
