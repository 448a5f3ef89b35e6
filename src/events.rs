//! Event emission helpers for the identity registry.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when a profile is created.
pub fn emit_profile_created(env: &Env, owner: &Address, name: &String) {
    let topics = (Symbol::new(env, "profile_created"),);
    env.events().publish(topics, (owner.clone(), name.clone()));
}

/// Emit an event when a profile is updated.
pub fn emit_profile_updated(env: &Env, owner: &Address, name: &String) {
    let topics = (Symbol::new(env, "profile_updated"),);
    env.events().publish(topics, (owner.clone(), name.clone()));
}

/// Emit an event when a profile is deleted.
pub fn emit_profile_deleted(env: &Env, owner: &Address, name: &String) {
    let topics = (Symbol::new(env, "profile_deleted"),);
    env.events().publish(topics, (owner.clone(), name.clone()));
}

/// Emit an event when a profile is verified by the administrator.
pub fn emit_profile_verified(env: &Env, owner: &Address) {
    let topics = (Symbol::new(env, "profile_verified"),);
    env.events().publish(topics, owner.clone());
}

/// Emit an event when a profile's verification is revoked.
pub fn emit_profile_unverified(env: &Env, owner: &Address) {
    let topics = (Symbol::new(env, "profile_unverified"),);
    env.events().publish(topics, owner.clone());
}
