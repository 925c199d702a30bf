//! Shared test helpers for deposit_incentive tests.

#![cfg(test)]

use crate::{ContractConfig, DepositIncentive, DepositIncentiveClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Tokens minted to the depositor.
pub const DEFAULT_MINT: i128 = 1_000_000;
/// Payout reserve minted straight to the contract.
pub const RESERVE: i128 = 1_000;
/// Native-value tokens minted to the depositor for entry fees.
pub const FEE_MINT: i128 = 100;

pub const ENTRY_FEE: i128 = 1;
pub const MIN_DEPOSIT: i128 = 10;
pub const MAX_DEPOSIT: i128 = 100_000;
pub const INTEREST_RATE: u32 = 30;
pub const BONUS_RATE: u32 = 50;
pub const ROUND_COUNT: u32 = 3;

/// One hour in seconds.
pub const ONE_HOUR: u64 = 3_600;

pub struct TestEnv<'a> {
    pub client: DepositIncentiveClient<'a>,
    pub contract_id: Address,
    pub admin: Address,
    pub owner: Address,
    pub asset: TokenClient<'a>,
    pub fee_token: TokenClient<'a>,
}

/// Registers the contract plus two Stellar asset contracts (staked asset
/// and fee token), funds `owner` and the payout reserve, approves the
/// contract and leaves it uninitialized.
pub fn deploy(e: &Env) -> TestEnv<'_> {
    e.mock_all_auths();

    let contract_id = e.register(DepositIncentive, ());
    let client = DepositIncentiveClient::new(e, &contract_id);
    let admin = Address::generate(e);
    let owner = Address::generate(e);

    let asset_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let asset_admin = StellarAssetClient::new(e, &asset_id);
    asset_admin.mint(&owner, &DEFAULT_MINT);
    asset_admin.mint(&contract_id, &RESERVE);

    let fee_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    StellarAssetClient::new(e, &fee_id).mint(&owner, &FEE_MINT);

    let asset = TokenClient::new(e, &asset_id);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    asset.approve(&owner, &contract_id, &DEFAULT_MINT, &expiry_ledger);

    TestEnv {
        client,
        contract_id,
        admin,
        owner,
        asset,
        fee_token: TokenClient::new(e, &fee_id),
    }
}

/// A fresh address funded with the default mint and fee balance, with the
/// contract approved to spend its asset.
pub fn new_depositor(e: &Env, t: &TestEnv) -> Address {
    let user = Address::generate(e);
    StellarAssetClient::new(e, &t.asset.address).mint(&user, &DEFAULT_MINT);
    StellarAssetClient::new(e, &t.fee_token.address).mint(&user, &FEE_MINT);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    t.asset
        .approve(&user, &t.contract_id, &DEFAULT_MINT, &expiry_ledger);
    user
}

/// Default configuration for a deployed `TestEnv`.
pub fn default_config(t: &TestEnv) -> ContractConfig {
    ContractConfig {
        asset: t.asset.address.clone(),
        fee_token: t.fee_token.address.clone(),
        entry_fee: ENTRY_FEE,
        min_deposit: MIN_DEPOSIT,
        max_deposit: MAX_DEPOSIT,
        interest_rate: INTEREST_RATE,
        bonus_rate: BONUS_RATE,
        round_count: ROUND_COUNT,
        claim_cooldown: 0,
        admin: t.admin.clone(),
    }
}

/// Full environment setup with the default configuration.
pub fn setup(e: &Env) -> TestEnv<'_> {
    let t = deploy(e);
    t.client.initialize(&default_config(&t));
    t
}

/// Setup with a caller-tweaked configuration.
pub fn setup_with(e: &Env, tweak: impl FnOnce(&mut ContractConfig)) -> TestEnv<'_> {
    let t = deploy(e);
    let mut cfg = default_config(&t);
    tweak(&mut cfg);
    t.client.initialize(&cfg);
    t
}
