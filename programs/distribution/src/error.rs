use anchor_lang::prelude::*;

/// Custom error codes for the distribution program.
#[error_code]
pub enum DistributionError {
    #[msg("Staking epoch duration must be more than 0")]
    InvalidEpochDuration,

    #[msg("Invalid address")]
    InvalidPubkey,

    #[msg("Different arrays sizes")]
    ArraySizeMismatch,

    #[msg("The participant stake must be more than 0")]
    InvalidStake,

    #[msg("The sum of participants stakes is more than the whole stake")]
    StakesExceedPool,

    #[msg("Duplicate participant wallet")]
    DuplicateParticipant,

    #[msg("Participant list is full")]
    ParticipantListFull,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Percentage must be within [0, 100]")]
    InvalidPercentage,

    #[msg("Already initialized")]
    AlreadyInitialized,

    #[msg("Not initialized")]
    NotInitialized,

    #[msg("Participants list is sealed")]
    ParticipantsSealed,

    #[msg("Participants list is not sealed")]
    ParticipantsNotSealed,

    #[msg("Distribution address already set")]
    DistributionAlreadySet,

    #[msg("Distribution address is not set")]
    DistributionNotSet,

    #[msg("Installments are not active for this pool")]
    InstallmentsNotActive,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Wrong pool")]
    WrongPool,

    #[msg("Wrong sender")]
    WrongSender,

    #[msg("Wrong address")]
    WrongAddress,

    #[msg("Not a contract address")]
    NotAContract,

    #[msg("Bridge address is not set")]
    BridgeNotSet,

    #[msg("Participant not found")]
    ParticipantNotFound,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Release would exceed the pool stake")]
    ReleaseExceedsStake,

    #[msg("Wrong contract balance")]
    BalanceMismatch,

    #[msg("Not a token mint")]
    InvalidLedger,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for pool address")]
    InvalidDestinationAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Pool tokens are not approved for the bridged unlock")]
    InsufficientApproval,

    #[msg("Private offering ledger account is required")]
    MissingPrivateOffering,
}

/// Coarse failure taxonomy shared by every instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad construction inputs.
    Configuration,
    /// Already/not-yet initialized, already-set references.
    State,
    /// Before cliff or nothing new to release.
    Timing,
    /// Wrong caller for a governed action.
    Authorization,
    /// Overflow in percentage or pro-rata math.
    Arithmetic,
    /// Token ledger or collaborator rejected the operation.
    External,
}

impl DistributionError {
    /// Coarse class of the failure. The program only returns the error code; clients that
    /// decode it back into `DistributionError` group failures with this.
    pub fn class(self) -> ErrorClass {
        use DistributionError::*;
        match self {
            InvalidEpochDuration | InvalidPubkey | ArraySizeMismatch | InvalidStake
            | StakesExceedPool | DuplicateParticipant | ParticipantListFull | BatchTooLarge
            | EmptyBatch | InvalidPercentage => ErrorClass::Configuration,

            AlreadyInitialized | NotInitialized | ParticipantsSealed | ParticipantsNotSealed
            | DistributionAlreadySet | DistributionNotSet | BridgeNotSet
            | MissingPrivateOffering => ErrorClass::State,

            InstallmentsNotActive | NothingToWithdraw => ErrorClass::Timing,

            UnauthorizedOwner | NotAuthorized | WrongPool | WrongSender | WrongAddress
            | NotAContract | ParticipantNotFound => ErrorClass::Authorization,

            MathOverflow | ReleaseExceedsStake => ErrorClass::Arithmetic,

            BalanceMismatch | InvalidLedger | InvalidTokenMint | InvalidTokenAccount
            | InvalidDestinationAta | InsufficientVaultBalance | InsufficientApproval => {
                ErrorClass::External
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_matches_failure_kinds() {
        assert_eq!(DistributionError::AlreadyInitialized.class(), ErrorClass::State);
        assert_eq!(DistributionError::InstallmentsNotActive.class(), ErrorClass::Timing);
        assert_eq!(DistributionError::NotAuthorized.class(), ErrorClass::Authorization);
        assert_eq!(DistributionError::MathOverflow.class(), ErrorClass::Arithmetic);
        assert_eq!(DistributionError::InsufficientApproval.class(), ErrorClass::External);
        assert_eq!(DistributionError::StakesExceedPool.class(), ErrorClass::Configuration);
    }
}
