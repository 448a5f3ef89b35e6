//! # Soroban Identity Registry
//!
//! Deterministic identity registry for the Soroban blockchain ecosystem.
//!
//! Each principal may register exactly one profile under a globally unique
//! name. The contract maintains two indices — principal to profile, and name
//! to principal — plus a live-profile counter, and keeps them consistent
//! across every state transition:
//!
//! - Unique names enforced through a secondary index
//! - Owner-only updates and deletion
//! - Administrator-controlled verification flag
//! - Read-only queries over both indices
//!
//! The host applies each invocation's storage writes atomically, so a reader
//! never observes the two indices in disagreement.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Register a profile
//! client.create_profile(&caller, &name, &bio, &avatar, &website);
//!
//! // Query by principal or name
//! let profile = client.get_profile(&caller);
//! let profile = client.get_profile_by_name(&name);
//!
//! // Admin verification
//! client.verify_identity(&admin, &target);
//! ```

#![no_std]

mod events;
mod profile;
mod storage;
mod validation;

pub use profile::Profile;
pub use storage::DataKey;
pub use validation::{
    validate_avatar, validate_bio, validate_name, validate_website, MAX_AVATAR_LENGTH,
    MAX_BIO_LENGTH, MAX_NAME_LENGTH, MAX_WEBSITE_LENGTH,
};

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

use crate::events::*;
use crate::storage::{PROFILE_TTL_EXTEND, PROFILE_TTL_THRESHOLD};

/// Error codes for the identity registry contract.
///
/// The 100-range codes are stable and relied upon by callers.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not authorized for this operation.
    NotAuthorized = 100,
    /// Caller already has a profile, or the name is taken.
    ProfileExists = 101,
    /// No profile exists for the principal.
    ProfileNotFound = 102,
    /// Name is empty or too long.
    InvalidName = 103,
    /// Bio or website exceeds its length bound.
    InvalidInput = 104,
    /// Avatar reference is empty or too long.
    InvalidAvatar = 105,
}

#[contract]
pub struct IdentityRegistry;

#[contractimpl]
impl IdentityRegistry {
    // ========== Initialization ==========

    /// Initialize the registry with an administrator address.
    ///
    /// This must be called once before any other operations. The
    /// administrator is the only principal allowed to change verification
    /// flags.
    pub fn init(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::ProfileCount, &0u64);

        Ok(())
    }

    /// Get the administrator address.
    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)
    }

    // ========== State transitions ==========

    /// Create a profile for the caller.
    ///
    /// # Arguments
    /// * `caller` - Principal registering the profile; becomes its owner
    /// * `name` - Globally unique name, 1..=50 bytes
    /// * `bio` - Biography, up to 160 bytes, may be empty
    /// * `avatar` - Content reference (IPFS CID, URL), 1..=200 bytes
    /// * `website` - Optional URL, up to 100 bytes
    ///
    /// # Errors
    /// - `ProfileExists` if the caller already has a profile or the name is
    ///   taken by another principal
    /// - `InvalidName` / `InvalidAvatar` / `InvalidInput` on field bounds
    pub fn create_profile(
        env: Env,
        caller: Address,
        name: String,
        bio: String,
        avatar: String,
        website: Option<String>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_init(&env)?;

        // Caller's own state first, shared resources after.
        if env
            .storage()
            .persistent()
            .has(&DataKey::Profile(caller.clone()))
        {
            return Err(RegistryError::ProfileExists);
        }

        validation::validate_name(&name)?;
        validation::validate_avatar(&avatar)?;
        validation::validate_bio(&bio)?;
        validation::validate_website(&website)?;

        if env
            .storage()
            .persistent()
            .has(&DataKey::Owner(name.clone()))
        {
            return Err(RegistryError::ProfileExists);
        }

        let created_at = env.ledger().sequence() as u64;
        let profile = Profile::new(caller.clone(), name.clone(), bio, avatar, website, created_at);

        // Both indices are written within this invocation, so they commit
        // together or not at all.
        env.storage()
            .persistent()
            .set(&DataKey::Owner(name.clone()), &caller);
        env.storage()
            .persistent()
            .set(&DataKey::Profile(caller.clone()), &profile);

        Self::bump_ttl(&env, &DataKey::Owner(name.clone()));
        Self::bump_ttl(&env, &DataKey::Profile(caller.clone()));

        let count = Self::get_profile_count(env.clone());
        env.storage()
            .instance()
            .set(&DataKey::ProfileCount, &(count + 1));

        emit_profile_created(&env, &caller, &name);

        Ok(())
    }

    /// Update the caller's profile in place.
    ///
    /// All fields are re-validated as at creation. Changing the name moves
    /// the secondary-index entry in the same invocation; keeping the current
    /// name is never a collision. `verified` and `created_at` are preserved.
    ///
    /// # Errors
    /// - `ProfileNotFound` if the caller has no profile
    /// - `ProfileExists` if the new name is taken by another principal
    /// - `InvalidName` / `InvalidAvatar` / `InvalidInput` on field bounds
    pub fn update_profile(
        env: Env,
        caller: Address,
        new_name: String,
        bio: String,
        avatar: String,
        website: Option<String>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_init(&env)?;

        let mut profile: Profile = env
            .storage()
            .persistent()
            .get(&DataKey::Profile(caller.clone()))
            .ok_or(RegistryError::ProfileNotFound)?;

        validation::validate_name(&new_name)?;
        validation::validate_avatar(&avatar)?;
        validation::validate_bio(&bio)?;
        validation::validate_website(&website)?;

        if new_name != profile.name {
            if env
                .storage()
                .persistent()
                .has(&DataKey::Owner(new_name.clone()))
            {
                return Err(RegistryError::ProfileExists);
            }

            env.storage()
                .persistent()
                .remove(&DataKey::Owner(profile.name.clone()));
            env.storage()
                .persistent()
                .set(&DataKey::Owner(new_name.clone()), &caller);
            Self::bump_ttl(&env, &DataKey::Owner(new_name.clone()));
        }

        profile.name = new_name.clone();
        profile.bio = bio;
        profile.avatar = avatar;
        profile.website = website;

        env.storage()
            .persistent()
            .set(&DataKey::Profile(caller.clone()), &profile);
        Self::bump_ttl(&env, &DataKey::Profile(caller.clone()));

        emit_profile_updated(&env, &caller, &new_name);

        Ok(())
    }

    /// Delete the caller's profile.
    ///
    /// Removes both index entries and decrements the counter. The name
    /// becomes available for registration again.
    pub fn delete_profile(env: Env, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_init(&env)?;

        let profile: Profile = env
            .storage()
            .persistent()
            .get(&DataKey::Profile(caller.clone()))
            .ok_or(RegistryError::ProfileNotFound)?;

        env.storage()
            .persistent()
            .remove(&DataKey::Owner(profile.name.clone()));
        env.storage()
            .persistent()
            .remove(&DataKey::Profile(caller.clone()));

        let count = Self::get_profile_count(env.clone());
        env.storage()
            .instance()
            .set(&DataKey::ProfileCount, &count.saturating_sub(1));

        emit_profile_deleted(&env, &caller, &profile.name);

        Ok(())
    }

    /// Mark a profile as verified (admin only).
    pub fn verify_identity(env: Env, caller: Address, target: Address) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        Self::set_verified(&env, &target, true)?;
        emit_profile_verified(&env, &target);
        Ok(())
    }

    /// Revoke a profile's verification (admin only).
    pub fn unverify_identity(
        env: Env,
        caller: Address,
        target: Address,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        Self::set_verified(&env, &target, false)?;
        emit_profile_unverified(&env, &target);
        Ok(())
    }

    // ========== Queries ==========

    /// Get a profile by its owning principal.
    pub fn get_profile(env: Env, principal: Address) -> Option<Profile> {
        env.storage()
            .persistent()
            .get(&DataKey::Profile(principal))
    }

    /// Get a profile by name, resolving through the name index.
    pub fn get_profile_by_name(env: Env, name: String) -> Option<Profile> {
        let owner: Address = env.storage().persistent().get(&DataKey::Owner(name))?;
        env.storage().persistent().get(&DataKey::Profile(owner))
    }

    /// Get the principal that owns a name.
    pub fn get_profile_owner(env: Env, name: String) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner(name))
    }

    /// Check whether a principal has a profile.
    pub fn profile_exists(env: Env, principal: Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Profile(principal))
    }

    /// Check whether a principal's profile is verified.
    ///
    /// Returns false when no profile exists.
    pub fn is_profile_verified(env: Env, principal: Address) -> bool {
        Self::get_profile(env, principal)
            .map(|p| p.verified)
            .unwrap_or(false)
    }

    /// Check whether a name can be registered.
    ///
    /// Names that fail validation are reported as unavailable.
    pub fn is_name_available(env: Env, name: String) -> bool {
        if validation::validate_name(&name).is_err() {
            return false;
        }
        !env.storage().persistent().has(&DataKey::Owner(name))
    }

    /// Get the count of live profiles.
    pub fn get_profile_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProfileCount)
            .unwrap_or(0)
    }

    // ========== Internal helpers ==========

    fn require_init(env: &Env) -> Result<(), RegistryError> {
        if !env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)?;

        if *caller != admin {
            return Err(RegistryError::NotAuthorized);
        }

        caller.require_auth();
        Ok(())
    }

    fn set_verified(env: &Env, target: &Address, verified: bool) -> Result<(), RegistryError> {
        let mut profile: Profile = env
            .storage()
            .persistent()
            .get(&DataKey::Profile(target.clone()))
            .ok_or(RegistryError::ProfileNotFound)?;

        profile.verified = verified;

        env.storage()
            .persistent()
            .set(&DataKey::Profile(target.clone()), &profile);
        Self::bump_ttl(env, &DataKey::Profile(target.clone()));

        Ok(())
    }

    fn bump_ttl(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
    }
}
