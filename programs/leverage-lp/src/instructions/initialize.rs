use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Create the params account with the genesis parameter set
///
/// Called once at protocol genesis. The signer becomes the authority that
/// may later replace the params through `update_params`.
#[derive(Accounts)]
pub struct InitializeParams<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ParamsConfig::SIZE,
        seeds = [PARAMS_SEED],
        bump
    )]
    pub params_config: Account<'info, ParamsConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeParams>) -> Result<()> {
    let params_config = &mut ctx.accounts.params_config;

    params_config.initialize(ctx.accounts.authority.key(), ctx.bumps.params_config)?;

    msg!(
        "Leverage params initialized: leverage_max={:?} epoch_length={} number_per_block={}",
        params_config.params.leverage_max,
        params_config.params.epoch_length,
        params_config.params.number_per_block
    );

    emit!(ParamsInitialized {
        params_config: params_config.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct ParamsInitialized {
    pub params_config: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}
