/// Simulated wall clock: time-of-day, day-of-week and the time-window
/// queries (maintenance, fee zones, large-amount window) built on them.
pub mod clock;

/// Account entity: balance, tier, daily counters and the lock/auth state
/// machine. State is modified through events created after validation.
pub mod account;

/// Registered accounts keyed by account number.
pub mod store;

/// The fee schedule: (effective tier, time zone, operation) -> yen.
pub mod fees;

/// Pure validation rules, evaluated in a fixed order per transaction.
pub mod validator;

/// The user-facing rejection taxonomy.
pub mod error;

/// Structured commands handed in by the parsing layer.
pub mod command;

/// Orchestrates one command end-to-end and owns all mutable state.
pub mod processor;

/// Exhaustive dispatch from command kind to processor entry point.
pub mod router;

/// Line-oriented I/O bootstrap around the core. Lives in the library
/// rather than the binary so integration tests can drive the whole
/// pipeline.
pub mod bin_utils;
