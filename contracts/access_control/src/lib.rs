#![no_std]
use shared_utils::storage;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// Roles understood by the access control module
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// May change the allow-list status of any address
    Whitelister,
}

/// Storage keys for access control
#[contracttype]
#[derive(Clone)]
pub enum AccessControlKey {
    Owner,
    Member(Role, Address),
}

/// Access control errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccessControlError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
}

const ROLE_GRANTED: Symbol = symbol_short!("role_grnt");

/// Owner record and role membership for a single contract instance
pub struct AccessControl;

impl AccessControl {
    /// Initialize owner (only once per contract instance)
    pub fn init_owner(e: &Env, owner: &Address) -> Result<(), AccessControlError> {
        if e.storage().instance().has(&AccessControlKey::Owner) {
            return Err(AccessControlError::AlreadyInitialized);
        }
        e.storage().instance().set(&AccessControlKey::Owner, owner);
        Ok(())
    }

    /// Get the owner address
    pub fn get_owner(e: &Env) -> Option<Address> {
        e.storage().instance().get(&AccessControlKey::Owner)
    }

    /// Grant `role` to `account`. Returns false when the account already held it.
    pub fn grant_role(e: &Env, role: Role, account: &Address) -> bool {
        if Self::has_role(e, role, account) {
            return false;
        }

        let key = AccessControlKey::Member(role, account.clone());
        e.storage().persistent().set(&key, &true);
        storage::extend_persistent_ttl(e, &key);

        e.events()
            .publish((ROLE_GRANTED, role), account.clone());

        true
    }

    /// Check if `account` holds `role`
    pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
        e.storage()
            .persistent()
            .get(&AccessControlKey::Member(role, account.clone()))
            .unwrap_or(false)
    }

    /// Require that the caller signed the invocation and holds `role`.
    /// A held role's entry is kept alive on every successful check.
    pub fn require_role(e: &Env, role: Role, caller: &Address) -> Result<(), AccessControlError> {
        caller.require_auth();
        if !Self::has_role(e, role, caller) {
            return Err(AccessControlError::Unauthorized);
        }
        storage::extend_persistent_ttl(e, &AccessControlKey::Member(role, caller.clone()));
        Ok(())
    }
}
