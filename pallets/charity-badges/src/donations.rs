//! Donation routing: forward the payment, then mint the donor's badge.

use frame_support::{
    ensure,
    pallet_prelude::*,
    traits::{fungible::Mutate, tokens::Preservation},
};

use crate::{
    BadgeId, BadgeMessage, BalanceOf, CharityName, Config, Error, Event, LedgerRecord, Pallet,
    Paused, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Forward `amount` from `donor` to the charity's payout account and mint
    /// a badge to `recipient`, returning its id.
    ///
    /// Every check that can reject the mint runs before funds move, so a
    /// failing donation leaves balances and the ledger untouched.
    pub(crate) fn do_donate(
        donor: T::AccountId,
        charity: CharityName<T>,
        recipient: T::AccountId,
        amount: BalanceOf<T>,
        message: BadgeMessage<T>,
    ) -> Result<BadgeId, DispatchError> {
        ensure!(!Paused::<T>::get(), Error::<T>::DonationsPaused);
        ensure!(amount >= T::MinimumDonation::get(), Error::<T>::BelowMinimum);

        let charity_address = Self::payout_address(&charity)?;
        let router = Self::router_account();
        Self::ensure_can_mint(&router)?;

        T::Currency::transfer(&donor, &charity_address, amount, Preservation::Preserve).map_err(
            |err| {
                log::debug!(
                    target: LOG_TARGET,
                    "forwarding {amount:?} from {donor:?} to {charity_address:?} failed: {err:?}"
                );
                Error::<T>::TransferFailed
            },
        )?;

        let token_id = Self::do_mint(&router, recipient, amount, charity.clone(), message)?;

        log::info!(
            target: LOG_TARGET,
            "donation of {amount:?} from {donor:?} to {charity_address:?} minted badge #{token_id}"
        );
        Self::record(LedgerRecord::Donation {
            token_id,
            charity_address,
            from: donor,
            charity_name: charity,
            amount,
            created_at: Self::now(),
        });
        Ok(token_id)
    }

    pub(crate) fn do_set_paused(paused: bool) {
        Paused::<T>::put(paused);
        log::info!(target: LOG_TARGET, "donations paused: {paused}");
        if paused {
            Self::deposit_event(Event::DonationsPaused);
        } else {
            Self::deposit_event(Event::DonationsResumed);
        }
    }
}
