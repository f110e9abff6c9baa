//! Weights for pallet-charity-badges.
//!
//! Reference figures, to be regenerated with `frame-benchmarking-cli` on
//! production hardware once the `runtime-benchmarks` suite is run.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-charity-badges.
pub trait WeightInfo {
    fn add_charity() -> Weight;
    fn remove_charity() -> Weight;
    fn set_tier_uri() -> Weight;
    fn transfer_minter() -> Weight;
    fn transfer_ownership() -> Weight;
    fn mint() -> Weight;
    fn donate() -> Weight;
    fn transfer_badge() -> Weight;
    fn set_donations_paused() -> Weight;
}

/// Weights for pallet-charity-badges using the node's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Reads: `Owner`. Writes: `Charities`, `History`, `HistoryLength`.
    fn add_charity() -> Weight {
        Weight::from_parts(18_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Reads: `Owner`, `Charities`. Writes: `Charities`, `History`, `HistoryLength`.
    fn remove_charity() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Reads: `Owner`. Writes: `TierUris`.
    fn set_tier_uri() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Reads: `Owner`, `Minter`. Writes: `Minter`.
    fn transfer_minter() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Reads: `Owner`. Writes: `Owner`.
    fn transfer_ownership() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Reads: `Minter`, `MaxSupply`, `TotalMinted`, `BadgesOwned`, `TierUris`,
    /// `HistoryLength`, `Timestamp::Now`.
    /// Writes: `Badges`, `BadgesOwned`, `TotalMinted`, `History`, `HistoryLength`.
    fn mint() -> Weight {
        Weight::from_parts(32_000_000, 4_200)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
    /// Mint plus `Paused`, `Charities` and both `System::Account` entries.
    fn donate() -> Weight {
        Weight::from_parts(78_000_000, 7_800)
            .saturating_add(T::DbWeight::get().reads(11_u64))
            .saturating_add(T::DbWeight::get().writes(9_u64))
    }
    /// Reads: `Badges`, `BadgesOwned` x2. Writes: `Badges`, `BadgesOwned` x2.
    fn transfer_badge() -> Weight {
        Weight::from_parts(20_000_000, 4_200)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Reads: `Owner`. Writes: `Paused`.
    fn set_donations_paused() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn add_charity() -> Weight {
        Weight::from_parts(18_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn remove_charity() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn set_tier_uri() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_minter() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(32_000_000, 4_200)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
    }
    fn donate() -> Weight {
        Weight::from_parts(78_000_000, 7_800)
            .saturating_add(RocksDbWeight::get().reads(11_u64))
            .saturating_add(RocksDbWeight::get().writes(9_u64))
    }
    fn transfer_badge() -> Weight {
        Weight::from_parts(20_000_000, 4_200)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn set_donations_paused() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
