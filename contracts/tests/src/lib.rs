#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use crowdfund_registry::{
    CrowdfundRegistryContract, CrowdfundRegistryContractClient as RegistryClient,
};

#[test]
fn test_successful_campaign_e2e() {
    let env = Env::default();

    // Automatically handles authorizations for all contract calls in the test
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000_000);

    // Identities
    let admin = Address::generate(&env);
    let creator = Address::generate(&env);
    let donor_a = Address::generate(&env);
    let donor_b = Address::generate(&env);

    // Token the campaigns are denominated in
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    let token_client = TokenClient::new(&env, &token_id.address());
    let token_admin_client = StellarAssetClient::new(&env, &token_id.address());
    token_admin_client.mint(&donor_a, &5_000);
    token_admin_client.mint(&donor_b, &5_000);

    // Registry
    let registry_id = env.register(CrowdfundRegistryContract, ());
    let registry = RegistryClient::new(&env, &registry_id);
    registry.initialize(&admin, &token_client.address);

    // Launch: goal 1000, open for 1000 seconds starting in 10
    let start_at = 1_000_010u64;
    let end_at = 1_001_000u64;
    let campaign_id = registry.launch(&creator, &1000, &start_at, &end_at);

    // Donors pledge once the campaign opens; donor_a reduces their pledge
    env.ledger().set_timestamp(start_at);
    registry.pledge(&donor_a, &campaign_id, &800);
    registry.pledge(&donor_b, &campaign_id, &500);
    registry.unpledge(&donor_a, &campaign_id, &200);

    // The registry holds the pledged total in custody
    assert_eq!(token_client.balance(&registry_id), 1100);
    assert_eq!(registry.get_campaign(&campaign_id).pledged, 1100);

    // After the window closes the creator settles the campaign
    env.ledger().set_timestamp(end_at + 1);
    registry.claim(&creator, &campaign_id);

    assert_eq!(token_client.balance(&creator), 1100);
    assert_eq!(token_client.balance(&registry_id), 0);
    assert!(registry.get_campaign(&campaign_id).claimed);
}

#[test]
fn test_failed_campaign_e2e() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000_000);

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);

    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    let token_client = TokenClient::new(&env, &token_id.address());
    let token_admin_client = StellarAssetClient::new(&env, &token_id.address());
    token_admin_client.mint(&donor, &5_000);

    let registry_id = env.register(CrowdfundRegistryContract, ());
    let registry = RegistryClient::new(&env, &registry_id);
    registry.initialize(&admin, &token_client.address);

    let start_at = 1_000_010u64;
    let end_at = 1_001_000u64;
    let campaign_id = registry.launch(&creator, &1000, &start_at, &end_at);

    // The goal is missed by a wide margin
    env.ledger().set_timestamp(start_at);
    registry.pledge(&donor, &campaign_id, &50);

    // After the window closes the donor takes their contribution back
    env.ledger().set_timestamp(end_at + 1);
    let refunded = registry.refund(&donor, &campaign_id);

    assert_eq!(refunded, 50);
    assert_eq!(token_client.balance(&donor), 5_000);
    assert_eq!(token_client.balance(&registry_id), 0);
}
