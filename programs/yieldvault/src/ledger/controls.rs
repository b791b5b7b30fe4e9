use crate::ledger::{
    validate_deposit_limit, validate_yield_rate, AdminTransferredEvent, EmergencyModeChangedEvent,
    EventSink, LedgerError, LedgerEvent, MaxDepositLimitChangedEvent, ProtocolParams,
    ProtocolPauseChangedEvent, TokenMintChangedEvent, YieldRateChangedEvent,
};
use anchor_lang::prelude::*;

/// Sets the pause flag, which blocks deposits only.
pub fn set_protocol_paused<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    paused: bool,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    params.protocol_paused = paused;

    sink.emit(LedgerEvent::ProtocolPauseChanged(ProtocolPauseChangedEvent {
        paused,
        admin: *caller,
        block: current_block,
    }));
    Ok(())
}

/// Toggles emergency mode.
///
/// Enabling also pauses the protocol. Disabling leaves the pause flag as it
/// is; the admin clears it separately.
pub fn set_emergency_mode<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    enabled: bool,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    params.emergency_mode = enabled;
    if enabled {
        params.protocol_paused = true;
    }

    sink.emit(LedgerEvent::EmergencyModeChanged(EmergencyModeChangedEvent {
        enabled,
        protocol_paused: params.protocol_paused,
        admin: *caller,
        block: current_block,
    }));
    Ok(())
}

/// Replaces the per-position deposit cap immediately.
pub fn set_max_deposit_limit<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    new_limit: u64,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    validate_deposit_limit(new_limit)?;

    let old_limit = params.max_deposit_limit;
    params.max_deposit_limit = new_limit;

    sink.emit(LedgerEvent::MaxDepositLimitChanged(MaxDepositLimitChangedEvent {
        old_limit,
        new_limit,
        block: current_block,
    }));
    Ok(())
}

/// Hands the admin role to `new_admin` immediately.
pub fn transfer_admin<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    new_admin: Pubkey,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    require!(
        new_admin != Pubkey::default(),
        LedgerError::InvalidParameter
    );

    let old_admin = params.admin;
    params.admin = new_admin;

    sink.emit(LedgerEvent::AdminTransferred(AdminTransferredEvent {
        old_admin,
        new_admin,
        block: current_block,
    }));
    Ok(())
}

/// Legacy rate setter that applies the new rate without the timelock.
///
/// The emitted event carries `immediate: true` so the bypass stays visible to
/// indexers.
pub fn set_yield_rate_immediate<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    new_rate_bps: u64,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    validate_yield_rate(new_rate_bps)?;

    let old_rate_bps = params.yield_rate_bps;
    params.yield_rate_bps = new_rate_bps;

    sink.emit(LedgerEvent::YieldRateChanged(YieldRateChangedEvent {
        old_rate_bps,
        new_rate_bps,
        immediate: true,
        block: current_block,
    }));
    Ok(())
}

/// Legacy setter replacing the accepted token mint immediately.
pub fn set_token_mint<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    new_mint: Pubkey,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    require!(
        new_mint != Pubkey::default(),
        LedgerError::InvalidParameter
    );

    let old_mint = params.token_mint;
    params.token_mint = new_mint;

    sink.emit(LedgerEvent::TokenMintChanged(TokenMintChangedEvent {
        old_mint,
        new_mint,
        block: current_block,
    }));
    Ok(())
}
