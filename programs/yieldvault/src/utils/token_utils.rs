use crate::constants::seeds;
use crate::ledger::{LedgerError, TokenTransfer};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

/// Generic token transfer that handles both holder-signed and PDA-signed transfers
///
/// # Arguments
/// * `mint` - Mint of the transferred token, used for `transfer_checked` decimals
/// * `token_program` - SPL Token or Token-2022 program
/// * `from_account` - Source token account
/// * `to_account` - Destination token account
/// * `authority` - The authority that can transfer from the source account
/// * `signer_seeds` - PDA seeds for program-signed transfers (None for user-signed)
/// * `amount` - Amount of tokens to transfer
pub fn transfer_tokens<'info>(
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    from_account: &InterfaceAccount<'info, TokenAccount>,
    to_account: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    signer_seeds: Option<&[&[&[u8]]]>,
    amount: u64,
) -> Result<()> {
    let transfer_accounts = TransferChecked {
        from: from_account.to_account_info(),
        mint: mint.to_account_info(),
        to: to_account.to_account_info(),
        authority: authority.clone(),
    };

    let transfer_ctx = match signer_seeds {
        Some(seeds) => {
            CpiContext::new_with_signer(token_program.key(), transfer_accounts, seeds)
        }
        None => CpiContext::new(token_program.key(), transfer_accounts),
    };

    token_interface::transfer_checked(transfer_ctx, amount, mint.decimals)
}

/// Direction of a transfer between one holder and the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRoute {
    /// Holder to vault, signed by the holder
    Inbound,
    /// Vault to holder, signed by the vault authority PDA
    Outbound,
}

/// Resolves which way a `from -> to` transfer runs, or `None` when the pair
/// is not exactly the holder and the vault authority.
pub fn route_transfer(
    holder: &Pubkey,
    vault: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
) -> Option<TransferRoute> {
    if from == holder && to == vault {
        Some(TransferRoute::Inbound)
    } else if from == vault && to == holder {
        Some(TransferRoute::Outbound)
    } else {
        None
    }
}

/// Routes ledger transfers between one holder and the vault custody account.
///
/// Inbound transfers are signed by the holder, outbound transfers by the vault
/// authority PDA. Any other pair of identities is rejected.
pub struct SplVaultTransfer<'a, 'info> {
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub holder: &'a Signer<'info>,
    pub holder_token_account: &'a InterfaceAccount<'info, TokenAccount>,
    pub vault_authority: &'a AccountInfo<'info>,
    pub vault_authority_bump: u8,
    pub vault_token_account: &'a InterfaceAccount<'info, TokenAccount>,
}

impl<'a, 'info> SplVaultTransfer<'a, 'info> {
    /// Builds the adapter from the accounts every position context carries
    pub fn new(
        mint: &'a InterfaceAccount<'info, Mint>,
        token_program: &'a Interface<'info, TokenInterface>,
        holder: &'a Signer<'info>,
        holder_token_account: &'a InterfaceAccount<'info, TokenAccount>,
        vault_authority: &'a AccountInfo<'info>,
        vault_authority_bump: u8,
        vault_token_account: &'a InterfaceAccount<'info, TokenAccount>,
    ) -> Self {
        Self {
            mint,
            token_program,
            holder,
            holder_token_account,
            vault_authority,
            vault_authority_bump,
            vault_token_account,
        }
    }
}

impl TokenTransfer for SplVaultTransfer<'_, '_> {
    fn transfer(&mut self, amount: u64, from: &Pubkey, to: &Pubkey) -> Result<()> {
        let holder = self.holder.key();
        let vault = *self.vault_authority.key;

        match route_transfer(&holder, &vault, from, to) {
            Some(TransferRoute::Inbound) => transfer_tokens(
                self.mint,
                self.token_program,
                self.holder_token_account,
                self.vault_token_account,
                &self.holder.to_account_info(),
                None,
                amount,
            ),
            Some(TransferRoute::Outbound) => {
                let bump = [self.vault_authority_bump];
                let authority_seeds: &[&[u8]] = &[seeds::VAULT_AUTHORITY, &bump];
                let signer_seeds: &[&[&[u8]]] = &[authority_seeds];

                transfer_tokens(
                    self.mint,
                    self.token_program,
                    self.vault_token_account,
                    self.holder_token_account,
                    self.vault_authority,
                    Some(signer_seeds),
                    amount,
                )
            }
            None => err!(LedgerError::InvalidParameter),
        }
    }

    /// Token balance behind `account`.
    ///
    /// Only the holder and the vault authority have token accounts in this
    /// context, so any other identity reads as 0. The core only asks for the
    /// vault balance before outbound transfers, which always resolves here.
    fn balance_of(&self, account: &Pubkey) -> u64 {
        if *account == *self.vault_authority.key {
            self.vault_token_account.amount
        } else if *account == self.holder.key() {
            self.holder_token_account.amount
        } else {
            0
        }
    }
}
