//! A cloner for native test environments.
//!
//! Deploying from a wasm hash needs a built wasm, so tests register fresh
//! allow-list contracts up front and hand them to [`StockedCloner`], which
//! returns them one per `clone_template` call.

use crate::ClonerError;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

#[contracttype]
pub enum StockKey {
    Instances,
}

#[contract]
pub struct StockedCloner;

#[contractimpl]
impl StockedCloner {
    /// Queue freshly registered, uninitialized instances.
    pub fn stock(e: Env, instances: Vec<Address>) {
        let mut stock = Self::load(&e);
        stock.append(&instances);
        e.storage().instance().set(&StockKey::Instances, &stock);
    }

    pub fn remaining(e: Env) -> u32 {
        Self::load(&e).len()
    }

    pub fn clone_template(e: Env, _template: Address) -> Result<Address, ClonerError> {
        let mut stock = Self::load(&e);
        let next = stock.pop_front().ok_or(ClonerError::TemplateNotRegistered)?;
        e.storage().instance().set(&StockKey::Instances, &stock);
        Ok(next)
    }

    fn load(e: &Env) -> Vec<Address> {
        e.storage()
            .instance()
            .get(&StockKey::Instances)
            .unwrap_or(Vec::new(e))
    }
}
