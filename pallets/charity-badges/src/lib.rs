#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream; the read API still exposes it
#![allow(deprecated)]

//! # Charity Badges Pallet
//!
//! A registry of charity payout accounts, a donation router that forwards
//! payments to them, and a capped ledger of tiered badges minted to donors.
//!
//! - The **owner** edits the registry, sets per-tier metadata URIs and hands
//!   out the owner and minter roles.
//! - The **minter** is the only account allowed to mint. At genesis it is the
//!   router's own account (derived from [`Config::PalletId`]), so `donate` is
//!   the only way badges come into existence.
//! - Every registry change, mint and donation is appended to [`History`] and
//!   deposited as an event from the same place, so both sequences agree.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{fungible, UnixTime},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

pub use pallet::*;

mod access;
mod badges;
mod donations;
pub mod history;
pub mod migrations;
mod registry;
pub mod tier;
pub mod types;
pub mod weights;

pub use access::Role;
pub use history::{LedgerRecord, RecordKind};
pub use tier::Tier;
pub use types::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-charity-badges";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Native currency donations are paid and forwarded in.
        type Currency: fungible::Mutate<Self::AccountId>;

        /// Source of badge creation timestamps.
        type UnixTime: UnixTime;

        /// Identifier the router account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Smallest accepted donation.
        #[pallet::constant]
        type MinimumDonation: Get<BalanceOf<Self>>;

        /// Donations at or above this amount earn a Silver badge.
        #[pallet::constant]
        type SilverThreshold: Get<BalanceOf<Self>>;

        /// Donations at or above this amount earn a Gold badge.
        #[pallet::constant]
        type GoldThreshold: Get<BalanceOf<Self>>;

        #[pallet::constant]
        type MaxNameLength: Get<u32>;

        #[pallet::constant]
        type MaxMessageLength: Get<u32>;

        #[pallet::constant]
        type MaxUriLength: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Account allowed to perform administrative calls.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account allowed to mint badges.
    #[pallet::storage]
    #[pallet::getter(fn minter)]
    pub type Minter<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Active charities and their payout accounts.
    #[pallet::storage]
    pub type Charities<T: Config> =
        StorageMap<_, Blake2_128Concat, CharityName<T>, T::AccountId, OptionQuery>;

    /// Issuance cap. Zero until the ledger is initialized.
    #[pallet::storage]
    #[pallet::getter(fn max_supply)]
    pub type MaxSupply<T> = StorageValue<_, BadgeId, ValueQuery>;

    /// Number of badges minted so far, which is also the id of the latest one.
    #[pallet::storage]
    #[pallet::getter(fn total_minted)]
    pub type TotalMinted<T> = StorageValue<_, BadgeId, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn badge)]
    pub type Badges<T: Config> = StorageMap<_, Blake2_128Concat, BadgeId, BadgeRecordOf<T>, OptionQuery>;

    /// Number of badges held per account.
    #[pallet::storage]
    #[pallet::getter(fn badges_owned)]
    pub type BadgesOwned<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u32, ValueQuery>;

    /// Metadata URI per tier, resolved at read time.
    #[pallet::storage]
    #[pallet::getter(fn tier_uri)]
    pub type TierUris<T: Config> = StorageMap<_, Twox64Concat, Tier, TierUri<T>, ValueQuery>;

    /// Donations are rejected while set.
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Append-only ledger history, indexed by sequence number.
    #[pallet::storage]
    pub type History<T: Config> = StorageMap<_, Twox64Concat, u64, LedgerRecordOf<T>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn history_length)]
    pub type HistoryLength<T> = StorageValue<_, u64, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A charity was registered (or its payout account replaced).
        CharityAdded { name: CharityName<T>, payout: T::AccountId },
        /// A charity was removed from the registry.
        CharityRemoved { name: CharityName<T> },
        /// A badge was minted.
        Minted {
            id: BadgeId,
            owner: T::AccountId,
            tier: Tier,
            uri: TierUri<T>,
            message: BadgeMessage<T>,
            created_at: u64,
        },
        /// A donation was forwarded to a charity.
        Donation {
            token_id: BadgeId,
            charity_address: T::AccountId,
            from: T::AccountId,
            charity_name: CharityName<T>,
            amount: BalanceOf<T>,
            created_at: u64,
        },
        TierUriSet { tier: Tier, uri: TierUri<T> },
        MinterTransferred { old_minter: Option<T::AccountId>, new_minter: T::AccountId },
        OwnershipTransferred { old_owner: Option<T::AccountId>, new_owner: T::AccountId },
        /// A badge changed hands.
        BadgeTransferred { id: BadgeId, from: T::AccountId, to: T::AccountId },
        DonationsPaused,
        DonationsResumed,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        Unauthorized,
        /// No active charity with that name.
        CharityNotFound,
        /// No badge with that id.
        BadgeNotFound,
        /// Donation is below `MinimumDonation`.
        BelowMinimum,
        /// Every badge up to `MaxSupply` has been minted.
        SupplyExhausted,
        /// Charity names must not be empty.
        EmptyName,
        /// Payout account is the all-zero account.
        ZeroAddress,
        /// Max supply must be positive.
        InvalidMaxSupply,
        /// Forwarding the donation to the charity failed.
        TransferFailed,
        /// The ledger has no supply cap yet.
        NotInitialized,
        AlreadyInitialized,
        DonationsPaused,
        /// Caller does not hold the badge.
        NotBadgeOwner,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                T::MinimumDonation::get() <= T::SilverThreshold::get(),
                "MinimumDonation must not exceed SilverThreshold"
            );
            assert!(
                T::SilverThreshold::get() <= T::GoldThreshold::get(),
                "SilverThreshold must not exceed GoldThreshold"
            );
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Register `name` with `payout` as its payout account. Owner only.
        ///
        /// Re-adding an active name replaces its payout account.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::add_charity())]
        pub fn add_charity(
            origin: OriginFor<T>,
            name: CharityName<T>,
            payout: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Self::do_add_charity(name, payout)
        }

        /// Remove an active charity. Owner only.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::remove_charity())]
        pub fn remove_charity(origin: OriginFor<T>, name: CharityName<T>) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Self::do_remove_charity(name)
        }

        /// Set the metadata URI shown for every badge of `tier`. Owner only.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_tier_uri())]
        pub fn set_tier_uri(origin: OriginFor<T>, tier: Tier, uri: TierUri<T>) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Self::do_set_tier_uri(tier, uri);
            Ok(())
        }

        /// Hand the minter role to `new_minter`. Owner only.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_minter())]
        pub fn transfer_minter(origin: OriginFor<T>, new_minter: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Self::do_transfer_minter(new_minter);
            Ok(())
        }

        /// Hand the owner role to `new_owner`. Owner only.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Self::do_transfer_ownership(new_owner);
            Ok(())
        }

        /// Mint the next badge to `recipient`. Minter only.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            recipient: T::AccountId,
            amount: BalanceOf<T>,
            charity: CharityName<T>,
            message: BadgeMessage<T>,
        ) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::do_mint(&minter, recipient, amount, charity, message).map(|_| ())
        }

        /// Donate `amount` to `charity` and mint a badge to `recipient`.
        ///
        /// The payment is forwarded in full; the badge tier follows the amount.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::donate())]
        pub fn donate(
            origin: OriginFor<T>,
            charity: CharityName<T>,
            recipient: T::AccountId,
            amount: BalanceOf<T>,
            message: BadgeMessage<T>,
        ) -> DispatchResult {
            let donor = ensure_signed(origin)?;
            Self::do_donate(donor, charity, recipient, amount, message).map(|_| ())
        }

        /// Give badge `id` to `to`. Holder only.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_badge())]
        pub fn transfer_badge(origin: OriginFor<T>, id: BadgeId, to: T::AccountId) -> DispatchResult {
            let holder = ensure_signed(origin)?;
            Self::do_transfer_badge(holder, id, to)
        }

        /// Stop or resume accepting donations. Owner only.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_donations_paused())]
        pub fn set_donations_paused(origin: OriginFor<T>, paused: bool) -> DispatchResult {
            Self::ensure_role(origin, Role::Owner)?;
            Self::do_set_paused(paused);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Ledger owner. The ledger stays uninitialized when unset.
        pub owner: Option<T::AccountId>,
        /// Minter; defaults to the router account.
        pub minter: Option<T::AccountId>,
        /// Issuance cap, must be positive when `owner` is set.
        pub max_supply: BadgeId,
        /// Initial metadata URI per tier.
        pub tier_uris: Vec<(Tier, Vec<u8>)>,
        /// Charities registered at genesis (name, payout account).
        pub charities: Vec<(Vec<u8>, T::AccountId)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let Some(owner) = self.owner.clone() else {
                return;
            };
            let minter = self.minter.clone().unwrap_or_else(Pallet::<T>::router_account);
            Pallet::<T>::initialize(owner, minter, self.max_supply)
                .expect("Ledger genesis requires a positive max supply");

            for (tier, uri) in &self.tier_uris {
                let uri: TierUri<T> = uri.clone().try_into().expect("Tier URI too long");
                Pallet::<T>::do_set_tier_uri(*tier, uri);
            }

            for (name, payout) in &self.charities {
                let name: CharityName<T> =
                    name.clone().try_into().expect("Charity name too long");
                Pallet::<T>::do_add_charity(name, payout.clone())
                    .expect("Genesis charity needs a name and a non-zero payout account");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account the router mints from. Installed as minter at genesis by default.
    pub fn router_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Install the owner, minter and supply cap. Runs once.
    pub fn initialize(owner: T::AccountId, minter: T::AccountId, max_supply: BadgeId) -> DispatchResult {
        ensure!(MaxSupply::<T>::get() == 0, Error::<T>::AlreadyInitialized);
        ensure!(max_supply > 0, Error::<T>::InvalidMaxSupply);

        Owner::<T>::put(&owner);
        Minter::<T>::put(&minter);
        MaxSupply::<T>::put(max_supply);

        log::info!(
            target: LOG_TARGET,
            "ledger initialized: owner {owner:?}, minter {minter:?}, max supply {max_supply}"
        );
        Ok(())
    }

    /// Full ledger history, oldest first.
    pub fn history() -> Vec<LedgerRecordOf<T>> {
        (0..HistoryLength::<T>::get()).filter_map(|index| History::<T>::get(index)).collect()
    }

    /// History entries of one kind, oldest first.
    pub fn history_of_kind(kind: RecordKind) -> Vec<LedgerRecordOf<T>> {
        Self::history().into_iter().filter(|record| record.kind() == kind).collect()
    }

    /// Charities active according to the history, in the order they were added.
    pub fn active_charities() -> Vec<(CharityName<T>, T::AccountId)> {
        history::active_charities(Self::history())
    }

    /// Append `entry` to the history and deposit the matching event.
    pub(crate) fn record(entry: LedgerRecordOf<T>) {
        let index = HistoryLength::<T>::get();
        History::<T>::insert(index, entry.clone());
        HistoryLength::<T>::put(index.saturating_add(1));
        Self::deposit_event(entry.into());
    }

    pub(crate) fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let minted = TotalMinted::<T>::get();
        ensure!(minted <= MaxSupply::<T>::get(), "More badges minted than the supply cap");
        ensure!(
            Badges::<T>::iter_keys().count() as u64 == minted as u64,
            "Badge count does not match TotalMinted"
        );
        ensure!(
            BadgesOwned::<T>::iter_values().map(u64::from).sum::<u64>() == minted as u64,
            "Per-holder badge counts do not add up to TotalMinted"
        );

        let active = Self::active_charities();
        ensure!(
            active.len() == Charities::<T>::iter_keys().count(),
            "Registry and history disagree on the number of active charities"
        );
        for (name, payout) in active {
            ensure!(
                Charities::<T>::get(&name) == Some(payout),
                "Registry and history disagree on a payout account"
            );
        }
        Ok(())
    }
}

impl<T: Config> From<LedgerRecordOf<T>> for Event<T> {
    fn from(record: LedgerRecordOf<T>) -> Self {
        match record {
            LedgerRecord::CharityAdded { name, payout } => Event::CharityAdded { name, payout },
            LedgerRecord::CharityRemoved { name } => Event::CharityRemoved { name },
            LedgerRecord::Minted { id, owner, tier, uri, message, created_at } => {
                Event::Minted { id, owner, tier, uri, message, created_at }
            },
            LedgerRecord::Donation {
                token_id,
                charity_address,
                from,
                charity_name,
                amount,
                created_at,
            } => Event::Donation { token_id, charity_address, from, charity_name, amount, created_at },
        }
    }
}
