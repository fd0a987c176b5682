use anchor_lang::prelude::*;

use crate::constants::{MAX_PARTICIPANTS, MAX_PARTICIPANTS_PER_BATCH};
use crate::error::DistributionError;
use crate::state::pool::Pool;
use crate::utils::math::pro_rata;

/// A private offering participant and its payout progress.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub wallet: Pubkey,
    pub stake: u64,
    /// Total share credited from releases so far.
    pub credited: u64,
    /// Total share already transferred to the participant.
    pub withdrawn: u64,
}

impl ParticipantEntry {
    pub const SIZE: usize = 32 + 8 + 8 + 8;

    pub fn withdrawable(&self) -> u64 {
        self.credited.saturating_sub(self.withdrawn)
    }
}

/// Sub-ledger PDA splitting private offering releases among participants by stake.
#[account]
pub struct PrivateOfferingLedger {
    /// Owner authority (builds the participant table, binds the distribution).
    pub owner: Pubkey,
    /// Distribution state allowed to drive this ledger; default until the handshake.
    pub distribution: Pubkey,
    /// Token mint bound by the distribution at its initialization.
    pub mint: Pubkey,
    pub initialized: bool,
    /// Participant table frozen; no further mutation of stakes.
    pub sealed: bool,
    pub bump: u8,
    /// Sum of participant stakes.
    pub total_stake: u64,
    /// Sum of all releases forwarded by the distribution.
    pub total_received: u64,
    /// Sum of all participant credits.
    pub total_credited: u64,
    /// Unassigned tokens already burned.
    pub unassigned_burned: u64,
    /// BLAKE3 over (wallet, stake) in insertion order, fixed at seal.
    pub stake_table_hash: [u8; 32],
    pub participants: Vec<ParticipantEntry>,
}

impl PrivateOfferingLedger {
    /// Space for discriminator + fixed fields + vec header + `capacity` entries.
    pub const fn space(capacity: usize) -> usize {
        8 + 32 + 32 + 32 + 1 + 1 + 1 + 8 + 8 + 8 + 8 + 32 + 4 + capacity * ParticipantEntry::SIZE
    }

    pub fn init(&mut self, owner: Pubkey, bump: u8) {
        self.owner = owner;
        self.distribution = Pubkey::default();
        self.mint = Pubkey::default();
        self.initialized = false;
        self.sealed = false;
        self.bump = bump;
        self.total_stake = 0;
        self.total_received = 0;
        self.total_credited = 0;
        self.unassigned_burned = 0;
        self.stake_table_hash = [0u8; 32];
        self.participants = Vec::new();
    }

    /// Appends a batch of participants; `seal` freezes the table afterwards.
    pub fn add_participants(
        &mut self,
        caller: Pubkey,
        wallets: &[Pubkey],
        stakes: &[u64],
        seal: bool,
    ) -> Result<()> {
        require_keys_eq!(caller, self.owner, DistributionError::UnauthorizedOwner);
        require!(!self.sealed, DistributionError::ParticipantsSealed);
        require!(
            wallets.len() == stakes.len(),
            DistributionError::ArraySizeMismatch
        );
        require!(
            wallets.len() <= MAX_PARTICIPANTS_PER_BATCH,
            DistributionError::BatchTooLarge
        );
        require!(!wallets.is_empty() || seal, DistributionError::EmptyBatch);

        for wallet in wallets {
            require!(*wallet != Pubkey::default(), DistributionError::InvalidPubkey);
        }
        for stake in stakes {
            require!(*stake > 0, DistributionError::InvalidStake);
        }
        require!(
            self.participants.len() + wallets.len() <= MAX_PARTICIPANTS,
            DistributionError::ParticipantListFull
        );

        let mut total = self.total_stake;
        for (i, (wallet, stake)) in wallets.iter().zip(stakes).enumerate() {
            // Reject duplicates vs existing list and within the batch itself.
            if self.position(wallet).is_some() || wallets[..i].contains(wallet) {
                return Err(DistributionError::DuplicateParticipant.into());
            }
            total = total
                .checked_add(*stake)
                .ok_or(DistributionError::MathOverflow)?;
        }
        require!(
            total <= Pool::PrivateOffering.stake(),
            DistributionError::StakesExceedPool
        );

        for (wallet, stake) in wallets.iter().zip(stakes) {
            self.participants.push(ParticipantEntry {
                wallet: *wallet,
                stake: *stake,
                credited: 0,
                withdrawn: 0,
            });
        }
        self.total_stake = total;

        if seal {
            self.sealed = true;
            self.stake_table_hash = stake_table_hash(&self.participants);
        }
        Ok(())
    }

    fn position(&self, wallet: &Pubkey) -> Option<usize> {
        self.participants.iter().position(|e| e.wallet == *wallet)
    }

    /// Committed stake of `wallet`. The zero key reports the unassigned remainder.
    pub fn participant_stake(&self, wallet: &Pubkey) -> u64 {
        if *wallet == Pubkey::default() {
            return self.unassigned_stake();
        }
        self.position(wallet)
            .map(|i| self.participants[i].stake)
            .unwrap_or(0)
    }

    pub fn unassigned_stake(&self) -> u64 {
        Pool::PrivateOffering.stake().saturating_sub(self.total_stake)
    }

    /// Handshake: accept `distribution` only if it names `this_ledger` as its private
    /// offering destination.
    pub fn set_distribution(
        &mut self,
        caller: Pubkey,
        distribution: Pubkey,
        registered_ledger: Pubkey,
        this_ledger: Pubkey,
    ) -> Result<()> {
        require_keys_eq!(caller, self.owner, DistributionError::UnauthorizedOwner);
        require!(
            self.distribution == Pubkey::default(),
            DistributionError::DistributionAlreadySet
        );
        require!(self.sealed, DistributionError::ParticipantsNotSealed);
        require_keys_eq!(registered_ledger, this_ledger, DistributionError::WrongAddress);
        self.distribution = distribution;
        Ok(())
    }

    /// Binds the token mint; only the registered distribution may call this, once.
    pub fn bind_token(&mut self, sender: Pubkey, mint: Pubkey) -> Result<()> {
        require!(
            self.distribution != Pubkey::default(),
            DistributionError::DistributionNotSet
        );
        require_keys_eq!(sender, self.distribution, DistributionError::WrongSender);
        require!(!self.initialized, DistributionError::AlreadyInitialized);
        self.mint = mint;
        self.initialized = true;
        Ok(())
    }

    /// Credits every participant `floor(amount * stake / pool stake)`. Returns the amount
    /// credited; the rest stays unassigned.
    pub fn receive_release(&mut self, sender: Pubkey, amount: u64) -> Result<u64> {
        require_keys_eq!(sender, self.distribution, DistributionError::WrongSender);
        require!(self.initialized, DistributionError::NotInitialized);

        let received = self
            .total_received
            .checked_add(amount)
            .ok_or(DistributionError::MathOverflow)?;
        require!(
            received <= Pool::PrivateOffering.stake(),
            DistributionError::ReleaseExceedsStake
        );

        let pool_stake = Pool::PrivateOffering.stake();
        let mut credited: u64 = 0;
        for entry in self.participants.iter_mut() {
            let share = pro_rata(amount, entry.stake, pool_stake)?;
            entry.credited = entry
                .credited
                .checked_add(share)
                .ok_or(DistributionError::MathOverflow)?;
            credited = credited
                .checked_add(share)
                .ok_or(DistributionError::MathOverflow)?;
        }

        self.total_received = received;
        self.total_credited = self
            .total_credited
            .checked_add(credited)
            .ok_or(DistributionError::MathOverflow)?;
        Ok(credited)
    }

    pub fn withdrawable(&self, wallet: &Pubkey) -> Result<u64> {
        let i = self
            .position(wallet)
            .ok_or(DistributionError::ParticipantNotFound)?;
        Ok(self.participants[i].withdrawable())
    }

    /// Marks everything credited to `wallet` as withdrawn; returns the amount to transfer.
    pub fn record_withdrawal(&mut self, wallet: &Pubkey) -> Result<u64> {
        let i = self
            .position(wallet)
            .ok_or(DistributionError::ParticipantNotFound)?;
        let entry = &mut self.participants[i];
        let amount = entry.withdrawable();
        require!(amount > 0, DistributionError::NothingToWithdraw);
        entry.withdrawn = entry.credited;
        Ok(amount)
    }

    /// Received but never credited to a participant, and not yet burned.
    pub fn unassigned_balance(&self) -> u64 {
        self.total_received
            .saturating_sub(self.total_credited)
            .saturating_sub(self.unassigned_burned)
    }

    /// Owner-only; marks the current unassigned balance as burned and returns it.
    pub fn take_unassigned(&mut self, caller: Pubkey) -> Result<u64> {
        require_keys_eq!(caller, self.owner, DistributionError::UnauthorizedOwner);
        let amount = self.unassigned_balance();
        require!(amount > 0, DistributionError::NothingToWithdraw);
        self.unassigned_burned = self
            .unassigned_burned
            .checked_add(amount)
            .ok_or(DistributionError::MathOverflow)?;
        Ok(amount)
    }
}

/// Digest of the participant table so it can be re-derived off-chain.
pub fn stake_table_hash(entries: &[ParticipantEntry]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for e in entries {
        hasher.update(e.wallet.as_ref());
        hasher.update(&e.stake.to_le_bytes());
    }
    *hasher.finalize().as_bytes()
}
