//! Benchmarking setup for pallet-charity-badges

use super::*;

#[allow(unused)]
use crate::Pallet as CharityBadges;
use frame_benchmarking::v2::*;
use frame_support::traits::fungible::{Inspect, Mutate};
use frame_system::RawOrigin;
use sp_runtime::traits::Saturating;

/// Longest value the bound `S` admits, filled with `byte`.
fn bounded<S: Get<u32>>(byte: u8) -> BoundedVec<u8, S> {
    sp_std::vec![byte; S::get() as usize].try_into().expect("length equals the bound")
}

/// Make `caller` the owner, keep the router as minter and lift the cap.
fn install_owner<T: Config>(caller: &T::AccountId) {
    Owner::<T>::put(caller);
    Minter::<T>::put(CharityBadges::<T>::router_account());
    MaxSupply::<T>::put(BadgeId::MAX);
}

fn register_charity<T: Config>() -> (CharityName<T>, T::AccountId) {
    let name = bounded::<T::MaxNameLength>(b'c');
    let payout: T::AccountId = account("payout", 0, 0);
    Charities::<T>::insert(&name, &payout);
    (name, payout)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn add_charity() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let name = bounded::<T::MaxNameLength>(b'c');
        let payout: T::AccountId = account("payout", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), name.clone(), payout.clone());

        assert_eq!(Charities::<T>::get(&name), Some(payout));
    }

    #[benchmark]
    fn remove_charity() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let (name, _) = register_charity::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), name.clone());

        assert!(!Charities::<T>::contains_key(&name));
    }

    #[benchmark]
    fn set_tier_uri() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let uri = bounded::<T::MaxUriLength>(b'u');

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Tier::Gold, uri.clone());

        assert_eq!(TierUris::<T>::get(Tier::Gold), uri);
    }

    #[benchmark]
    fn transfer_minter() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let new_minter: T::AccountId = account("minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_minter.clone());

        assert_eq!(Minter::<T>::get(), Some(new_minter));
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let new_owner: T::AccountId = account("owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        Minter::<T>::put(&caller);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let before = TotalMinted::<T>::get();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            recipient.clone(),
            T::GoldThreshold::get(),
            bounded::<T::MaxNameLength>(b'c'),
            bounded::<T::MaxMessageLength>(b'm'),
        );

        assert_eq!(TotalMinted::<T>::get(), before + 1);
        assert_eq!(BadgesOwned::<T>::get(&recipient), 1);
    }

    #[benchmark]
    fn donate() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let (name, payout) = register_charity::<T>();
        let amount = T::GoldThreshold::get();
        let funds = amount.saturating_mul(100u32.into()).saturating_add(T::Currency::minimum_balance());
        T::Currency::set_balance(&caller, funds);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let before = TotalMinted::<T>::get();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            name,
            recipient.clone(),
            amount,
            bounded::<T::MaxMessageLength>(b'm'),
        );

        assert_eq!(TotalMinted::<T>::get(), before + 1);
        assert!(T::Currency::balance(&payout) >= amount);
    }

    #[benchmark]
    fn transfer_badge() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);
        let id = CharityBadges::<T>::do_mint(
            &CharityBadges::<T>::router_account(),
            caller.clone(),
            T::MinimumDonation::get(),
            bounded::<T::MaxNameLength>(b'c'),
            bounded::<T::MaxMessageLength>(b'm'),
        )
        .expect("cap lifted and router holds the minter role");
        let to: T::AccountId = account("to", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), id, to.clone());

        assert_eq!(Badges::<T>::get(id).map(|badge| badge.owner), Some(to));
    }

    #[benchmark]
    fn set_donations_paused() {
        let caller: T::AccountId = whitelisted_caller();
        install_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), true);

        assert!(Paused::<T>::get());
    }

    impl_benchmark_test_suite!(CharityBadges, crate::mock::new_test_ext(), crate::mock::Test);
}
