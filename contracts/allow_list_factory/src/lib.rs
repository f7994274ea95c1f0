#![no_std]
use allow_list_interface::{AllowListClient, ClonerClient};
use shared_utils::{address, storage};
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, log, symbol_short, Address, Env, Symbol,
    Vec,
};

pub use allow_list_interface::AllowListError;

contractmeta!(
    key = "Description",
    val = "Mints independent allow-list instances from one template"
);

// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Template,
    Cloner,
    CloneCount,
}

// Event topics
pub const CLONE_DEPLOYED: Symbol = symbol_short!("CloneDep");

#[contract]
pub struct AllowListFactoryContract;

#[contractimpl]
impl AllowListFactoryContract {
    /// Initialize the factory with the template whose logic every clone runs and
    /// the cloner that produces new instances of it.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - factory already configured
    /// * `InvalidTemplate` - template is the zero address, or is not an initialized allow-list
    /// * `InvalidCloner` - cloner is the zero address
    pub fn initialize(e: Env, template: Address, cloner: Address) -> Result<(), AllowListError> {
        if e.storage().instance().has(&DataKey::Template) {
            return Err(AllowListError::AlreadyInitialized);
        }
        if address::is_zero_address(&e, &template) {
            return Err(AllowListError::InvalidTemplate);
        }
        if address::is_zero_address(&e, &cloner) {
            return Err(AllowListError::InvalidCloner);
        }

        // Anything that cannot answer as an initialized allow-list is rejected.
        match AllowListClient::new(&e, &template).try_is_initialized() {
            Ok(Ok(true)) => {}
            _ => return Err(AllowListError::InvalidTemplate),
        }

        e.storage().instance().set(&DataKey::Template, &template);
        e.storage().instance().set(&DataKey::Cloner, &cloner);
        e.storage().instance().set(&DataKey::CloneCount, &0u32);
        storage::extend_instance_ttl(&e);

        log!(&e, "factory initialized", template, cloner);
        Ok(())
    }

    /// Clone the template and initialize the clone with `owner` and
    /// `whitelisters`. Returns the new instance's address and publishes
    /// `(CloneDep,) -> (clone, owner)`.
    ///
    /// Initialization failures of the clone are returned unchanged; the whole
    /// invocation then rolls back, clone deployment included.
    pub fn new_allow_list(
        e: Env,
        owner: Address,
        whitelisters: Vec<Address>,
    ) -> Result<Address, AllowListError> {
        let template = Self::get_template(e.clone())?;
        let cloner = Self::get_cloner(e.clone())?;

        let clone = match ClonerClient::new(&e, &cloner).try_clone_template(&template) {
            Ok(Ok(clone)) => clone,
            _ => return Err(AllowListError::CloneFailed),
        };

        match AllowListClient::new(&e, &clone).try_initialize(&owner, &whitelisters) {
            Ok(Ok(())) => {}
            Err(Ok(err)) => return Err(err),
            _ => return Err(AllowListError::CloneFailed),
        }

        let count = Self::clone_count(e.clone());
        e.storage()
            .instance()
            .set(&DataKey::CloneCount, &(count + 1));
        storage::extend_instance_ttl(&e);

        log!(&e, "allow-list cloned", clone, owner);
        e.events()
            .publish((CLONE_DEPLOYED,), (clone.clone(), owner));

        Ok(clone)
    }

    pub fn get_template(e: Env) -> Result<Address, AllowListError> {
        e.storage()
            .instance()
            .get(&DataKey::Template)
            .ok_or(AllowListError::NotInitialized)
    }

    pub fn get_cloner(e: Env) -> Result<Address, AllowListError> {
        e.storage()
            .instance()
            .get(&DataKey::Cloner)
            .ok_or(AllowListError::NotInitialized)
    }

    /// Number of clones successfully produced so far
    pub fn clone_count(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::CloneCount)
            .unwrap_or(0)
    }
}
