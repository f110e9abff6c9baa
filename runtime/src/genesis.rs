//! Genesis state for a fresh deployment of the badge ledger.

use pallet_charity_badges::{BadgeId, Tier};
use sp_std::{vec, vec::Vec};

use crate::{AccountId, BalancesConfig, CharityBadgesConfig, RuntimeGenesisConfig, UNIT};

/// Badges that can ever be minted on a fresh deployment.
pub const DEPLOYMENT_MAX_SUPPLY: BadgeId = 10;

/// Native balance given to every endowed account: 1,000,000 tokens.
pub const ENDOWMENT: u128 = 1_000_000 * UNIT;

pub const BRONZE_BADGE_URI: &[u8] = b"QmYhuAS2R8S45bxGE3HT49mTmmPUqXotE4wTonDSLkFHjH";
pub const SILVER_BADGE_URI: &[u8] = b"QmZ7kXE3ww3j3542ArK5awSPmXjhQcanZ7tr58DohrVLTU";
pub const GOLD_BADGE_URI: &[u8] = b"QmWEBryUXhkm5aV8giSre58PT7k3Eap8qGVhWwWiGVyhTR";

/// Genesis for a deployment owned by `owner` (normally a multisig account).
///
/// The router account stays the minter, so donating is the only way badges
/// get minted. `charities` are registered in order.
pub fn deployment_genesis(
    owner: AccountId,
    charities: Vec<(Vec<u8>, AccountId)>,
    endowed_accounts: Vec<AccountId>,
) -> RuntimeGenesisConfig {
    RuntimeGenesisConfig {
        balances: BalancesConfig {
            balances: endowed_accounts.into_iter().map(|account| (account, ENDOWMENT)).collect(),
            ..Default::default()
        },
        charity_badges: CharityBadgesConfig {
            owner: Some(owner),
            minter: None,
            max_supply: DEPLOYMENT_MAX_SUPPLY,
            tier_uris: vec![
                (Tier::Bronze, BRONZE_BADGE_URI.to_vec()),
                (Tier::Silver, SILVER_BADGE_URI.to_vec()),
                (Tier::Gold, GOLD_BADGE_URI.to_vec()),
            ],
            charities,
        },
        ..Default::default()
    }
}
