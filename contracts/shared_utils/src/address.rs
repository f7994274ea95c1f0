use soroban_sdk::{Address, Env, String, Vec};

/// Strkey of the ed25519 account whose public key is 32 zero bytes.
pub const ZERO_ACCOUNT_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the contract whose id is 32 zero bytes.
pub const ZERO_CONTRACT_STRKEY: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// The zero account address.
pub fn zero_account(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, ZERO_ACCOUNT_STRKEY))
}

/// The zero contract address.
pub fn zero_contract(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, ZERO_CONTRACT_STRKEY))
}

/// Soroban has no native null address, so both all-zero strkeys count as zero.
pub fn is_zero_address(e: &Env, address: &Address) -> bool {
    *address == zero_account(e) || *address == zero_contract(e)
}

/// Index of the first zero address in `addresses`, if any.
pub fn find_zero_address(e: &Env, addresses: &Vec<Address>) -> Option<u32> {
    let account = zero_account(e);
    let contract = zero_contract(e);
    addresses
        .iter()
        .position(|a| a == account || a == contract)
        .map(|i| i as u32)
}
