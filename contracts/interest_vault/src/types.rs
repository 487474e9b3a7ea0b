use soroban_sdk::{contracttype, Address};

// ─── Parameters ────────────────────────────────────────────────────────────

/// Seconds a deposit stays locked before it can be withdrawn.
pub const LOCK_PERIOD_SECS: u64 = 60;

/// 365 days; the interest formula has no leap-year adjustment.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Annual rate, in percent, installed by the constructor.
pub const DEFAULT_INTEREST_RATE_PERCENT: u32 = 5;

/// Upper bound accepted by `set_interest_rate`.
pub const MAX_INTEREST_RATE_PERCENT: u32 = 100;

pub const PERCENT_DENOMINATOR: u64 = 100;

/// Minimum ledger TTL before a position entry is bumped (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ─── Position ──────────────────────────────────────────────────────────────

/// One account's stake. Only stored while `principal > 0`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// Outstanding principal, in token units.
    pub principal: i128,
    /// Ledger timestamp of the most recent deposit; the lock anchor.
    pub deposited_at: u64,
}

// ─── Config snapshot ───────────────────────────────────────────────────────

/// Read-only view of the vault parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub owner: Address,
    pub token: Address,
    pub interest_rate_percent: u32,
    pub lock_period_secs: u64,
    pub max_interest_rate_percent: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Privileged address, fixed by the constructor.
    Owner,
    /// Custody asset (the native XLM Stellar Asset Contract in production).
    Token,
    /// Annual interest rate in percent.
    InterestRate,
    /// Sum of every outstanding principal.
    TotalPrincipal,
    /// Re-entrancy guard flag.
    Locked,
    /// Per-account position. Stored in `persistent()`.
    Position(Address),
}
