use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups vault errors by domain for monitoring and off-chain display.
/// @dev    Consumers should switch on this value first, then on the specific
///         `VaultError` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Per-account position errors (codes 200-299).
    Position,
    /// Vault custody balance errors (codes 300-399).
    Custody,
    /// Owner-managed parameter errors (codes 400-499).
    Configuration,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  VaultError
/// @notice Every way a vault call can fail. A failed call commits nothing:
///         no storage write, no event, no token transfer.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///
/// Error Code Layout:
///   100 - 199 : Authorization
///   200 - 299 : Position
///   300 - 399 : Custody
///   400 - 499 : Configuration
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // --- Authorization (100-199) ---
    /// A privileged operation was invoked by someone other than the owner.
    NotOwner = 100,

    // --- Position (200-299) ---
    /// Deposit, withdrawal or reserve funding of a non-positive amount.
    InvalidAmount = 200,

    /// Withdrawal attempted before the lock period has elapsed since the
    /// last deposit.
    LockNotElapsed = 201,

    /// Withdrawal amount exceeds the account's recorded principal.
    InsufficientBalance = 202,

    /// A nested call entered the vault while another call was in flight.
    ReentrancyDetected = 203,

    // --- Custody (300-399) ---
    /// The vault cannot cover principal plus interest for this withdrawal.
    InsufficientCustody = 300,

    // --- Configuration (400-499) ---
    /// Requested interest rate exceeds `MAX_INTEREST_RATE_PERCENT`.
    RateTooHigh = 400,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every VaultError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for VaultError {
    fn category(&self) -> ErrorCategory {
        match self {
            VaultError::NotOwner => ErrorCategory::Authorization,

            VaultError::InvalidAmount
            | VaultError::LockNotElapsed
            | VaultError::InsufficientBalance
            | VaultError::ReentrancyDetected => ErrorCategory::Position,

            VaultError::InsufficientCustody => ErrorCategory::Custody,

            VaultError::RateTooHigh => ErrorCategory::Configuration,

            VaultError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            VaultError::NotOwner => "Caller is not the vault owner",
            VaultError::InvalidAmount => "Amount must be strictly positive (> 0)",
            VaultError::LockNotElapsed => "Lock period has not elapsed since the last deposit",
            VaultError::InsufficientBalance => "Withdrawal exceeds the staked principal",
            VaultError::ReentrancyDetected => "Reentrancy detected; call rejected",
            VaultError::InsufficientCustody => {
                "Vault balance cannot cover principal plus interest"
            }
            VaultError::RateTooHigh => "Interest rate exceeds the configured maximum",
            VaultError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
