//! Charity name to payout account directory.

use codec::Decode;
use frame_support::{ensure, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;

use crate::{Charities, CharityName, Config, Error, LedgerRecord, Pallet, LOG_TARGET};

impl<T: Config> Pallet<T> {
    /// Payout account of an active charity.
    pub fn payout_address(name: &CharityName<T>) -> Result<T::AccountId, DispatchError> {
        Charities::<T>::get(name).ok_or_else(|| Error::<T>::CharityNotFound.into())
    }

    pub fn is_active(name: &CharityName<T>) -> bool {
        Charities::<T>::contains_key(name)
    }

    pub(crate) fn do_add_charity(name: CharityName<T>, payout: T::AccountId) -> DispatchResult {
        ensure!(!name.is_empty(), Error::<T>::EmptyName);
        ensure!(payout != Self::zero_account(), Error::<T>::ZeroAddress);

        let replaced = Charities::<T>::get(&name);
        Charities::<T>::insert(&name, &payout);

        log::debug!(
            target: LOG_TARGET,
            "charity {:?} registered with payout {payout:?} (replaced {replaced:?})",
            name.as_slice()
        );
        Self::record(LedgerRecord::CharityAdded { name, payout });
        Ok(())
    }

    pub(crate) fn do_remove_charity(name: CharityName<T>) -> DispatchResult {
        ensure!(Charities::<T>::contains_key(&name), Error::<T>::CharityNotFound);
        Charities::<T>::remove(&name);

        log::debug!(target: LOG_TARGET, "charity {:?} removed", name.as_slice());
        Self::record(LedgerRecord::CharityRemoved { name });
        Ok(())
    }

    /// The all-zero account, never a valid payout target.
    fn zero_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }
}
