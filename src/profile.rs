//! Profile record type.

use soroban_sdk::{contracttype, Address, String};

/// Identity profile stored for each registered principal.
///
/// The owner address doubles as the primary storage key; `name` is kept
/// globally unique through the secondary name index.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Profile {
    /// Owning principal. Immutable once created.
    pub owner: Address,

    /// Unique human-readable name.
    pub name: String,

    /// Free-form biography. May be empty.
    pub bio: String,

    /// Avatar content reference (IPFS CID, URL, etc.). Required.
    pub avatar: String,

    /// Optional website URL.
    pub website: Option<String>,

    /// Verification flag. Only the administrator may change it.
    pub verified: bool,

    /// Ledger sequence at creation. Immutable.
    pub created_at: u64,
}

impl Profile {
    /// Create a fresh, unverified profile.
    pub fn new(
        owner: Address,
        name: String,
        bio: String,
        avatar: String,
        website: Option<String>,
        created_at: u64,
    ) -> Self {
        Self {
            owner,
            name,
            bio,
            avatar,
            website,
            verified: false,
            created_at,
        }
    }
}
