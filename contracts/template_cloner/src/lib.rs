#![no_std]
use shared_utils::{address, storage};
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, log, symbol_short, Address, BytesN, Env,
    Symbol,
};

pub use allow_list_interface::ClonerError;

contractmeta!(
    key = "Description",
    val = "Deploys fresh contracts running a registered template's wasm"
);

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Nonce,
    Template(Address), // template -> wasm hash
}

const TEMPLATE_REGISTERED: Symbol = symbol_short!("tmpl_reg");
const CLONED: Symbol = symbol_short!("cloned");

#[contract]
pub struct TemplateClonerContract;

#[contractimpl]
impl TemplateClonerContract {
    /// Initialize the cloner with the admin allowed to register templates
    pub fn initialize(e: Env, admin: Address) -> Result<(), ClonerError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ClonerError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Nonce, &0u64);
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    pub fn get_admin(e: Env) -> Result<Address, ClonerError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ClonerError::NotInitialized)
    }

    /// Record the wasm hash that `template` runs (admin only). A template's
    /// hash is fixed once registered.
    ///
    /// # Errors
    /// * `InvalidTemplate` - template is the zero address
    /// * `TemplateAlreadyRegistered` - template already has a hash
    pub fn register_template(
        e: Env,
        template: Address,
        wasm_hash: BytesN<32>,
    ) -> Result<(), ClonerError> {
        let admin = Self::get_admin(e.clone())?;
        admin.require_auth();

        if address::is_zero_address(&e, &template) {
            return Err(ClonerError::InvalidTemplate);
        }

        let key = DataKey::Template(template.clone());
        if e.storage().persistent().has(&key) {
            return Err(ClonerError::TemplateAlreadyRegistered);
        }
        e.storage().persistent().set(&key, &wasm_hash);
        storage::extend_persistent_ttl(&e, &key);

        e.events()
            .publish((TEMPLATE_REGISTERED, template), wasm_hash);
        Ok(())
    }

    pub fn template_wasm(e: Env, template: Address) -> Option<BytesN<32>> {
        e.storage().persistent().get(&DataKey::Template(template))
    }

    /// Deploy a new contract running `template`'s wasm. Its storage starts empty;
    /// the caller is expected to initialize it in the same invocation.
    pub fn clone_template(e: Env, template: Address) -> Result<Address, ClonerError> {
        let wasm_hash = Self::template_wasm(e.clone(), template.clone())
            .ok_or(ClonerError::TemplateNotRegistered)?;

        let nonce: u64 = e
            .storage()
            .instance()
            .get(&DataKey::Nonce)
            .ok_or(ClonerError::NotInitialized)?;
        e.storage().instance().set(&DataKey::Nonce, &(nonce + 1));
        storage::extend_instance_ttl(&e);

        let clone = e
            .deployer()
            .with_current_contract(Self::salt(&e, nonce))
            .deploy(wasm_hash);

        log!(&e, "template cloned", template, clone, nonce);
        e.events().publish((CLONED, template), clone.clone());

        Ok(clone)
    }

    /// Salt for the `nonce`-th deployment: the nonce big-endian in the first 8 bytes.
    fn salt(e: &Env, nonce: u64) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[..8].copy_from_slice(&nonce.to_be_bytes());
        BytesN::from_array(e, &salt)
    }
}
