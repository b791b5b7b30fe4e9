use crate::constants::seeds;
use crate::ledger::ProtocolParams;
use crate::state::VaultState;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetProtocolParams<'info> {
    #[account(seeds = [seeds::STATE], bump = state.bump)]
    pub state: Box<Account<'info, VaultState>>,
}

/// Returns the current protocol parameters
pub fn get_protocol_params(ctx: Context<GetProtocolParams>) -> Result<ProtocolParams> {
    let params = ctx.accounts.state.params;

    msg!(
        "Params - rate: {} bps / {} blocks, cap: {}, paused: {}, emergency: {}",
        params.yield_rate_bps,
        params.yield_period_blocks,
        params.max_deposit_limit,
        params.protocol_paused,
        params.emergency_mode
    );

    Ok(params)
}
