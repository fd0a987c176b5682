//! SPL token account helpers shared by the distribution and private offering instructions.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, TokenAccount, Transfer};

use crate::error::DistributionError;

/// ATA derivation: PDA(owner, token_program_id, mint) under the associated token program.
pub fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

/// Strict ATA check (pre-created ATA policy): address, mint and owner must all match.
pub fn require_ata(
    account: &Account<TokenAccount>,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(
        account.key(),
        expected_ata_address(owner, mint),
        DistributionError::InvalidDestinationAta
    );
    require_keys_eq!(account.mint, *mint, DistributionError::InvalidTokenMint);
    require_keys_eq!(account.owner, *owner, DistributionError::InvalidTokenAccount);
    Ok(())
}

/// The pool account must have delegated at least `amount` to `engine`.
pub fn require_pool_approval(
    delegate: COption<Pubkey>,
    delegated_amount: u64,
    engine: &Pubkey,
    amount: u64,
) -> Result<()> {
    let approved = match delegate {
        COption::Some(d) => d == *engine,
        COption::None => false,
    };
    require!(
        approved && delegated_amount >= amount,
        DistributionError::InsufficientApproval
    );
    Ok(())
}

/// Deserialize `info` as an SPL mint, failing with `InvalidLedger` for anything else.
pub fn load_mint(info: &AccountInfo) -> Result<Mint> {
    require_keys_eq!(
        *info.owner,
        anchor_spl::token::ID,
        DistributionError::InvalidLedger
    );
    let data = info.try_borrow_data()?;
    Mint::try_deserialize(&mut &data[..]).map_err(|_| DistributionError::InvalidLedger.into())
}

/// Token transfer signed by a program PDA (`authority` owns or is delegate of `from`).
pub fn transfer_signed<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
    )
}
