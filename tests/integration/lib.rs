#![cfg(test)]

//! End-to-end flows across the allow-list, factory and cloner contracts.

use allow_list::{AllowListContract, AllowListContractClient, AllowListError};
use allow_list_factory::{AllowListFactoryContract, AllowListFactoryContractClient};
use allow_list_interface::testutils::{StockedCloner, StockedClonerClient};
use shared_utils::zero_account;
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};
use template_cloner::{ClonerError, TemplateClonerContract, TemplateClonerContractClient};

mod wasm_deploy;

struct Deployment<'a> {
    e: Env,
    factory: AllowListFactoryContractClient<'a>,
    cloner: StockedClonerClient<'a>,
    owner: Address,
    first_party: Address,
}

/// Deployer flow: initialize the template with `(owner, [owner, first_party])`,
/// then point a factory at it.
fn deploy<'a>() -> Deployment<'a> {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let first_party = Address::generate(&e);

    let template = e.register_contract(None, AllowListContract);
    AllowListContractClient::new(&e, &template)
        .initialize(&owner, &vec![&e, owner.clone(), first_party.clone()]);

    let cloner = StockedClonerClient::new(&e, &e.register_contract(None, StockedCloner));
    let factory = AllowListFactoryContractClient::new(
        &e,
        &e.register_contract(None, AllowListFactoryContract),
    );
    factory.initialize(&template, &cloner.address);

    Deployment {
        e,
        factory,
        cloner,
        owner,
        first_party,
    }
}

fn restock(d: &Deployment, count: u32) {
    let mut blanks = Vec::new(&d.e);
    for _ in 0..count {
        blanks.push_back(d.e.register_contract(None, AllowListContract));
    }
    d.cloner.stock(&blanks);
}

#[test]
fn test_whitelister_and_malicious_party_on_clone() {
    let d = deploy();
    let e = &d.e;
    restock(&d, 1);

    let clone = d
        .factory
        .new_allow_list(&d.owner, &vec![e, d.owner.clone(), d.first_party.clone()]);
    let c1 = AllowListContractClient::new(e, &clone);

    let third_party = Address::generate(e);
    c1.set_whitelist_status(&d.first_party, &third_party, &true);
    assert!(c1.is_whitelisted(&third_party));

    let malicious = Address::generate(e);
    let other_target = Address::generate(e);
    assert_eq!(
        c1.try_set_whitelist_status(&malicious, &other_target, &true),
        Err(Ok(AllowListError::Unauthorized))
    );
    assert!(!c1.is_whitelisted(&other_target));
}

#[test]
fn test_owner_toggles_status_on_clone() {
    let d = deploy();
    let e = &d.e;
    restock(&d, 1);

    let clone = d
        .factory
        .new_allow_list(&d.owner, &vec![e, d.owner.clone(), d.first_party.clone()]);
    let c1 = AllowListContractClient::new(e, &clone);
    let target = Address::generate(e);

    c1.set_whitelist_status(&d.owner, &target, &true);
    assert!(c1.is_whitelisted(&target));
    c1.set_whitelist_status(&d.owner, &target, &false);
    assert!(!c1.is_whitelisted(&target));

    assert_eq!(
        c1.try_set_whitelist_status(&d.owner, &zero_account(e), &true),
        Err(Ok(AllowListError::InvalidTarget))
    );
}

#[test]
fn test_many_clones_stay_isolated() {
    let d = deploy();
    let e = &d.e;
    restock(&d, 3);

    let mut clones = Vec::new(e);
    for _ in 0..3 {
        let owner = Address::generate(e);
        clones.push_back(d.factory.new_allow_list(&owner, &Vec::new(e)));
    }
    assert_eq!(d.factory.clone_count(), 3);

    let target = Address::generate(e);
    let first = AllowListContractClient::new(e, &clones.get(0).unwrap());
    first.set_whitelist_status(&first.get_owner(), &target, &true);

    for i in 1..clones.len() {
        let other = AllowListContractClient::new(e, &clones.get(i).unwrap());
        assert!(!other.is_whitelisted(&target));
    }
}

#[test]
fn test_failed_mint_then_successful_mint() {
    let d = deploy();
    let e = &d.e;
    restock(&d, 1);

    assert_eq!(
        d.factory
            .try_new_allow_list(&d.owner, &vec![e, zero_account(e)]),
        Err(Ok(AllowListError::InvalidWhitelister))
    );

    // The same blank instance is still available to the next call.
    let clone = d.factory.new_allow_list(&d.owner, &vec![e, d.first_party.clone()]);
    assert!(AllowListContractClient::new(e, &clone).is_whitelister(&d.first_party));
    assert_eq!(d.factory.clone_count(), 1);
}

#[test]
fn test_factory_with_unregistered_template_cloner_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);

    let template = e.register_contract(None, AllowListContract);
    AllowListContractClient::new(&e, &template).initialize(&owner, &Vec::new(&e));

    let cloner = TemplateClonerContractClient::new(
        &e,
        &e.register_contract(None, TemplateClonerContract),
    );
    cloner.initialize(&owner);
    assert_eq!(
        cloner.try_clone_template(&template),
        Err(Ok(ClonerError::TemplateNotRegistered))
    );

    let factory = AllowListFactoryContractClient::new(
        &e,
        &e.register_contract(None, AllowListFactoryContract),
    );
    factory.initialize(&template, &cloner.address);

    assert_eq!(
        factory.try_new_allow_list(&owner, &Vec::new(&e)),
        Err(Ok(AllowListError::CloneFailed))
    );
}
