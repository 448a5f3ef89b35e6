//! Storage key definitions for the identity registry.

use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the identity registry.
///
/// `Profile` and `Owner` form a pair of indices that must stay consistent:
/// every live profile has exactly one entry in each, and `Owner(p.name)`
/// always resolves to `p.owner`. Both are written (or removed) within a
/// single invocation so readers never see them disagree.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Administrator address, set once at initialization.
    Admin,

    /// Count of live profiles.
    ProfileCount,

    /// Primary index: principal -> Profile.
    Profile(Address),

    /// Secondary index: name -> owning principal.
    /// Used to enforce name uniqueness and name-based lookup.
    Owner(String),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days
