//! Integration tests for the charity runtime.
//!
//! The ledger is deployed with a 2-of-3 multisig (Alice, Bob, Charlie) as
//! owner, exactly as `genesis::deployment_genesis` lays it out.
//!
//! # Test Categories
//!
//! 1. **Deployment**: genesis state, thresholds in 18-decimal units
//! 2. **Multisig Owner**: admin calls proposed and approved through pallet-multisig
//! 3. **Upgrades**: storage migrations wired into `Executive`

use crate::{genesis::*, *};
use frame_support::{
    assert_noop, assert_ok,
    traits::{GetStorageVersion, StorageVersion},
    weights::Weight,
};
use pallet_charity_badges::{CharityName, Error as BadgeError, Tier};
use sp_keyring::sr25519::Keyring as AccountKeyring;
use sp_runtime::{
    traits::{BlakeTwo256, Hash},
    BuildStorage,
};

/// Type alias for call hash used by pallet-multisig
type CallHash = [u8; 32];

/// 2023-11-14T22:13:20Z, in milliseconds.
const NOW_MS: u64 = 1_700_000_000_000;

fn signatories() -> Vec<AccountId> {
    let mut signatories = vec![
        AccountKeyring::Alice.to_account_id(),
        AccountKeyring::Bob.to_account_id(),
        AccountKeyring::Charlie.to_account_id(),
    ];
    // pallet-multisig requires signatories to be sorted
    signatories.sort();
    signatories
}

fn owner_multisig() -> AccountId {
    Multisig::multi_account_id(&signatories(), 2)
}

fn water_project() -> AccountId {
    AccountKeyring::Ferdie.to_account_id()
}

fn name(raw: &[u8]) -> CharityName<Runtime> {
    raw.to_vec().try_into().unwrap()
}

/// Build test externalities from the deployment genesis.
///
/// Sets up:
/// - The multisig owner and the router as minter
/// - `TheWaterProject` paying out to Ferdie
/// - Funded signatories, donor (Dave) and recipient (Eve)
fn new_test_ext() -> sp_io::TestExternalities {
    let t = deployment_genesis(
        owner_multisig(),
        vec![(b"TheWaterProject".to_vec(), water_project())],
        vec![
            AccountKeyring::Alice.to_account_id(),
            AccountKeyring::Bob.to_account_id(),
            AccountKeyring::Charlie.to_account_id(),
            AccountKeyring::Dave.to_account_id(),
            AccountKeyring::Eve.to_account_id(),
        ],
    )
    .build_storage()
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(NOW_MS);
    });
    ext
}

fn sorted_other_signatories(caller: &AccountId) -> Vec<AccountId> {
    signatories().into_iter().filter(|s| s != caller).collect()
}

/// Alice proposes `call`, Bob approves it and the call is dispatched from the
/// multisig account.
fn approve_as_owner(call: RuntimeCall) {
    let alice = AccountKeyring::Alice.to_account_id();
    let bob = AccountKeyring::Bob.to_account_id();
    let call_hash: CallHash = BlakeTwo256::hash_of(&call).into();

    assert_ok!(Multisig::as_multi(
        RuntimeOrigin::signed(alice.clone()),
        2,
        sorted_other_signatories(&alice),
        None,
        Box::new(call.clone()),
        Weight::zero(),
    ));

    let timepoint = pallet_multisig::Multisigs::<Runtime>::get(owner_multisig(), call_hash)
        .expect("Multisig should exist")
        .when;

    assert_ok!(Multisig::as_multi(
        RuntimeOrigin::signed(bob.clone()),
        2,
        sorted_other_signatories(&bob),
        Some(timepoint),
        Box::new(call),
        Weight::from_parts(10_000_000_000, 1_000_000),
    ));

    assert!(
        pallet_multisig::Multisigs::<Runtime>::get(owner_multisig(), call_hash).is_none(),
        "Multi-sig should be cleared after execution"
    );
}

fn donate(amount: Balance) -> frame_support::dispatch::DispatchResult {
    CharityBadges::donate(
        RuntimeOrigin::signed(AccountKeyring::Dave.to_account_id()),
        name(b"TheWaterProject"),
        AccountKeyring::Eve.to_account_id(),
        amount,
        b"for clean water".to_vec().try_into().unwrap(),
    )
}

// ============================================================================
// Deployment
// ============================================================================

#[test]
fn deployment_genesis_initializes_ledger() {
    new_test_ext().execute_with(|| {
        assert_eq!(CharityBadges::owner(), Some(owner_multisig()));
        assert_eq!(CharityBadges::minter(), Some(CharityBadges::router_account()));
        assert_eq!(CharityBadges::max_supply(), DEPLOYMENT_MAX_SUPPLY);
        assert_eq!(CharityBadges::total_minted(), 0);

        assert_eq!(CharityBadges::tier_uri(Tier::Bronze).to_vec(), BRONZE_BADGE_URI.to_vec());
        assert_eq!(CharityBadges::tier_uri(Tier::Silver).to_vec(), SILVER_BADGE_URI.to_vec());
        assert_eq!(CharityBadges::tier_uri(Tier::Gold).to_vec(), GOLD_BADGE_URI.to_vec());

        assert_eq!(
            CharityBadges::active_charities(),
            vec![(name(b"TheWaterProject"), water_project())]
        );
        assert_eq!(Balances::free_balance(AccountKeyring::Dave.to_account_id()), ENDOWMENT);
    });
}

#[test]
fn donation_tiers_follow_token_thresholds() {
    new_test_ext().execute_with(|| {
        let eve = AccountKeyring::Eve.to_account_id();

        assert_noop!(donate(8 * MILLI_UNIT - 1), BadgeError::<Runtime>::BelowMinimum);

        assert_ok!(donate(8 * MILLI_UNIT));
        assert_ok!(donate(88 * MILLI_UNIT));
        assert_ok!(donate(888 * MILLI_UNIT));
        assert_ok!(donate(887 * MILLI_UNIT));

        let tiers: Vec<_> =
            (1..=4u32).map(|id| CharityBadges::badge(id).map(|badge| badge.tier)).collect();
        assert_eq!(
            tiers,
            vec![Some(Tier::Bronze), Some(Tier::Silver), Some(Tier::Gold), Some(Tier::Silver)]
        );

        assert_eq!(CharityBadges::badges_owned(&eve), 4);
        assert_eq!(
            Balances::free_balance(water_project()),
            (8 + 88 + 888 + 887) * MILLI_UNIT
        );
        assert_eq!(
            CharityBadges::token_uri(3).map(|uri| uri.to_vec()),
            Ok(GOLD_BADGE_URI.to_vec())
        );
    });
}

#[test]
fn donations_stop_at_deployment_cap() {
    new_test_ext().execute_with(|| {
        for _ in 0..DEPLOYMENT_MAX_SUPPLY {
            assert_ok!(donate(UNIT));
        }
        let paid_out = Balances::free_balance(water_project());

        assert_noop!(donate(UNIT), BadgeError::<Runtime>::SupplyExhausted);
        assert_eq!(Balances::free_balance(water_project()), paid_out);
        assert_eq!(CharityBadges::total_minted(), DEPLOYMENT_MAX_SUPPLY);
    });
}

// ============================================================================
// Multisig Owner
// ============================================================================

#[test]
fn multisig_address_derivation_is_deterministic() {
    let mut reordered = signatories();
    reordered.reverse();
    reordered.sort();

    assert_eq!(Multisig::multi_account_id(&reordered, 2), owner_multisig());
    assert_ne!(
        Multisig::multi_account_id(&signatories(), 3),
        owner_multisig(),
        "Different thresholds must produce different addresses"
    );
}

#[test]
fn single_signatory_cannot_administer() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            CharityBadges::add_charity(
                RuntimeOrigin::signed(AccountKeyring::Alice.to_account_id()),
                name(b"InternetArchive"),
                AccountKeyring::One.to_account_id(),
            ),
            BadgeError::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn multisig_owner_adds_charity() {
    new_test_ext().execute_with(|| {
        let archive = AccountKeyring::One.to_account_id();

        approve_as_owner(
            pallet_charity_badges::Call::add_charity {
                name: name(b"InternetArchive"),
                payout: archive.clone(),
            }
            .into(),
        );

        assert_eq!(CharityBadges::payout_address(&name(b"InternetArchive")), Ok(archive.clone()));
        System::assert_has_event(
            pallet_charity_badges::Event::CharityAdded {
                name: name(b"InternetArchive"),
                payout: archive,
            }
            .into(),
        );
    });
}

#[test]
fn multisig_owner_pauses_donations() {
    new_test_ext().execute_with(|| {
        approve_as_owner(pallet_charity_badges::Call::set_donations_paused { paused: true }.into());

        assert!(CharityBadges::paused());
        assert_noop!(donate(UNIT), BadgeError::<Runtime>::DonationsPaused);
    });
}

#[test]
fn multisig_owner_hands_over_ownership() {
    new_test_ext().execute_with(|| {
        let successor = AccountKeyring::Dave.to_account_id();

        approve_as_owner(
            pallet_charity_badges::Call::transfer_ownership { new_owner: successor.clone() }
                .into(),
        );

        assert_eq!(CharityBadges::owner(), Some(successor.clone()));
        assert_ok!(CharityBadges::remove_charity(
            RuntimeOrigin::signed(successor),
            name(b"TheWaterProject")
        ));
        assert!(CharityBadges::active_charities().is_empty());
    });
}

// ============================================================================
// Upgrades
// ============================================================================

#[test]
fn runtime_upgrade_stamps_badge_storage_version() {
    new_test_ext().execute_with(|| {
        StorageVersion::new(0).put::<CharityBadges>();

        Executive::execute_on_runtime_upgrade();

        assert_eq!(CharityBadges::on_chain_storage_version(), 1);
    });
}
