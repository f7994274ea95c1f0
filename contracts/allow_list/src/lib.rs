#![no_std]
use access_control::{AccessControl, Role};
use shared_utils::{address, storage};
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, log, symbol_short, Address, Env, Symbol,
    Vec,
};

pub use allow_list_interface::AllowListError;

contractmeta!(
    key = "Description",
    val = "Role-gated address allow-list, cloneable through a factory"
);

// ============================================================================
// Storage Keys
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Whitelisted(Address),
}

// Event topics
pub const WHITELIST_STATUS_SET: Symbol = symbol_short!("WlStatus");

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct AllowListContract;

#[contractimpl]
impl AllowListContract {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the allow-list with its owner and initial whitelisters.
    ///
    /// The owner is granted the whitelister role along with every address in
    /// `whitelisters`; duplicates are harmless. Callable once, by anyone.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - `initialize` already succeeded on this instance
    /// * `InvalidOwner` - `owner` is the zero address
    /// * `InvalidWhitelister` - an entry of `whitelisters` is the zero address
    pub fn initialize(
        e: Env,
        owner: Address,
        whitelisters: Vec<Address>,
    ) -> Result<(), AllowListError> {
        if Self::is_initialized(e.clone()) {
            return Err(AllowListError::AlreadyInitialized);
        }
        if address::is_zero_address(&e, &owner) {
            return Err(AllowListError::InvalidOwner);
        }
        if address::find_zero_address(&e, &whitelisters).is_some() {
            return Err(AllowListError::InvalidWhitelister);
        }

        e.storage().instance().set(&DataKey::Initialized, &true);
        AccessControl::init_owner(&e, &owner)?;

        AccessControl::grant_role(&e, Role::Whitelister, &owner);
        for whitelister in whitelisters.iter() {
            AccessControl::grant_role(&e, Role::Whitelister, &whitelister);
        }

        storage::extend_instance_ttl(&e);
        log!(&e, "allow-list initialized", owner, whitelisters.len());

        Ok(())
    }

    // ========================================================================
    // Whitelist Management
    // ========================================================================

    /// Set whether `target` is whitelisted. `caller` must sign and hold the
    /// whitelister role.
    ///
    /// Every successful call publishes `(WlStatus, target) -> status`, even when
    /// the status is unchanged.
    ///
    /// # Errors
    /// * `Unauthorized` - `caller` is not a whitelister
    /// * `InvalidTarget` - `target` is the zero address
    pub fn set_whitelist_status(
        e: Env,
        caller: Address,
        target: Address,
        status: bool,
    ) -> Result<(), AllowListError> {
        AccessControl::require_role(&e, Role::Whitelister, &caller)?;

        if address::is_zero_address(&e, &target) {
            return Err(AllowListError::InvalidTarget);
        }

        let key = DataKey::Whitelisted(target.clone());
        e.storage().persistent().set(&key, &status);
        storage::extend_persistent_ttl(&e, &key);
        storage::extend_instance_ttl(&e);

        e.events()
            .publish((WHITELIST_STATUS_SET, target), status);

        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Whether `target` is currently whitelisted. Never set means `false`.
    pub fn is_whitelisted(e: Env, target: Address) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Whitelisted(target))
            .unwrap_or(false)
    }

    pub fn is_initialized(e: Env) -> bool {
        e.storage().instance().has(&DataKey::Initialized)
    }

    pub fn get_owner(e: Env) -> Result<Address, AllowListError> {
        AccessControl::get_owner(&e).ok_or(AllowListError::NotInitialized)
    }

    /// Whether `account` holds the whitelister role
    pub fn is_whitelister(e: Env, account: Address) -> bool {
        AccessControl::has_role(&e, Role::Whitelister, &account)
    }
}
