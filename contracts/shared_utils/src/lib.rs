#![no_std]

//! Helpers shared by the allow-list contracts.

pub mod address;
pub mod storage;

pub use address::{find_zero_address, is_zero_address, zero_account, zero_contract};
