use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod math;
pub mod state;
pub mod validation;
pub mod instructions;

use instructions::*;

declare_id!("7zzXa6G7idoJpjZwxE2Juq7yK3vqvTYDce3gm1bShDzT");

#[program]
pub mod leverage_lp {
    use super::*;

    /// Create the params account with genesis defaults
    pub fn initialize_params(ctx: Context<InitializeParams>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Validate and replace the committed params
    pub fn update_params(ctx: Context<UpdateParams>, params: Params) -> Result<()> {
        instructions::update_params::handler(ctx, params)
    }
}

// Re-export for external use
pub use state::*;
pub use errors::*;
pub use constants::*;
pub use math::*;
