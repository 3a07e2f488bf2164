use soroban_sdk::Env;

use crate::storage_types::{Error, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT, TTL_THRESHOLD};

/// Check if timestamp is in the future
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() < timestamp
}

/// True once the ledger clock is at or past `deadline`
pub fn deadline_reached(env: &Env, deadline: u64) -> bool {
    !is_future(env, deadline)
}

/// Validate a funding target is positive
pub fn validate_target(target: i128) -> Result<(), Error> {
    if target <= 0 {
        return Err(Error::InvalidTarget);
    }
    Ok(())
}

/// Validate a donation amount is positive
pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}
