#![no_std]

//! Cross-contract surface of the allow-list system.
//!
//! The instance and the factory share [`AllowListError`] so that failures raised
//! while the factory initializes a clone reach the factory's caller unchanged.

use access_control::AccessControlError;
use soroban_sdk::{contractclient, contracterror, Address, Env, Vec};

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

// ============================================================================
// Error Types
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AllowListError {
    /// `initialize` was already called on this contract
    AlreadyInitialized = 1,
    /// Owner may not be the zero address
    InvalidOwner = 2,
    /// No whitelister may be the zero address
    InvalidWhitelister = 3,
    /// The zero address cannot be given a whitelist status
    InvalidTarget = 4,
    /// Caller does not hold the whitelister role
    Unauthorized = 5,
    /// Template is the zero address or not an initialized allow-list
    InvalidTemplate = 6,
    /// Contract has not been initialized
    NotInitialized = 7,
    /// Cloner may not be the zero address
    InvalidCloner = 8,
    /// The cloner could not produce a new instance
    CloneFailed = 9,
}

impl From<AccessControlError> for AllowListError {
    fn from(err: AccessControlError) -> Self {
        match err {
            AccessControlError::AlreadyInitialized => AllowListError::AlreadyInitialized,
            AccessControlError::Unauthorized => AllowListError::Unauthorized,
        }
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ClonerError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// No wasm hash is registered for the template
    TemplateNotRegistered = 3,
    InvalidTemplate = 4,
    /// A wasm hash is already registered for the template
    TemplateAlreadyRegistered = 5,
}

// ============================================================================
// Client Interfaces
// ============================================================================

/// Calls the factory makes on an allow-list instance.
#[contractclient(name = "AllowListClient")]
pub trait AllowListInterface {
    fn initialize(e: Env, owner: Address, whitelisters: Vec<Address>) -> Result<(), AllowListError>;

    fn set_whitelist_status(
        e: Env,
        caller: Address,
        target: Address,
        status: bool,
    ) -> Result<(), AllowListError>;

    fn is_whitelisted(e: Env, target: Address) -> bool;

    fn is_initialized(e: Env) -> bool;

    fn is_whitelister(e: Env, account: Address) -> bool;
}

/// Produces a new contract running the template's logic with empty storage.
#[contractclient(name = "ClonerClient")]
pub trait ClonerInterface {
    fn clone_template(e: Env, template: Address) -> Result<Address, ClonerError>;
}
