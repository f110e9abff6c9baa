//! Capped badge issuance and per-tier metadata.

use frame_support::{ensure, pallet_prelude::*};

use crate::{
    tier::tier_for, BadgeId, BadgeMessage, BadgeRecord, Badges, BadgesOwned, BalanceOf,
    CharityName, Config, Error, Event, LedgerRecord, MaxSupply, Pallet, Role, Tier, TierUri,
    TierUris, TotalMinted, LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Metadata URI of badge `id`, read through its tier's current setting.
    pub fn token_uri(id: BadgeId) -> Result<TierUri<T>, DispatchError> {
        let badge = Badges::<T>::get(id).ok_or(Error::<T>::BadgeNotFound)?;
        Ok(TierUris::<T>::get(badge.tier))
    }

    /// Tier a payment of `amount` earns.
    pub fn tier_of(amount: BalanceOf<T>) -> Tier {
        tier_for(amount, T::SilverThreshold::get(), T::GoldThreshold::get())
    }

    pub fn remaining_supply() -> BadgeId {
        MaxSupply::<T>::get().saturating_sub(TotalMinted::<T>::get())
    }

    pub(crate) fn do_set_tier_uri(tier: Tier, uri: TierUri<T>) {
        TierUris::<T>::insert(tier, &uri);
        Self::deposit_event(Event::TierUriSet { tier, uri });
    }

    /// Checks everything `do_mint` checks before it writes anything.
    pub(crate) fn ensure_can_mint(minter: &T::AccountId) -> DispatchResult {
        Self::ensure_holder(minter, Role::Minter)?;
        let max_supply = MaxSupply::<T>::get();
        ensure!(max_supply > 0, Error::<T>::NotInitialized);
        ensure!(TotalMinted::<T>::get() < max_supply, Error::<T>::SupplyExhausted);
        Ok(())
    }

    pub(crate) fn do_mint(
        minter: &T::AccountId,
        recipient: T::AccountId,
        amount: BalanceOf<T>,
        charity: CharityName<T>,
        message: BadgeMessage<T>,
    ) -> Result<BadgeId, DispatchError> {
        Self::ensure_can_mint(minter)?;

        let id = TotalMinted::<T>::get().checked_add(1).ok_or(Error::<T>::Overflow)?;
        let owned = BadgesOwned::<T>::get(&recipient)
            .checked_add(1)
            .ok_or(Error::<T>::Overflow)?;
        let tier = Self::tier_of(amount);
        let created_at = Self::now();

        Badges::<T>::insert(
            id,
            BadgeRecord {
                owner: recipient.clone(),
                amount,
                tier,
                charity,
                message: message.clone(),
                created_at,
            },
        );
        BadgesOwned::<T>::insert(&recipient, owned);
        TotalMinted::<T>::put(id);

        log::debug!(target: LOG_TARGET, "badge #{id} ({tier:?}) minted to {recipient:?}");
        Self::record(LedgerRecord::Minted {
            id,
            owner: recipient,
            tier,
            uri: TierUris::<T>::get(tier),
            message,
            created_at,
        });
        Ok(id)
    }

    pub(crate) fn do_transfer_badge(
        holder: T::AccountId,
        id: BadgeId,
        to: T::AccountId,
    ) -> DispatchResult {
        let mut badge = Badges::<T>::get(id).ok_or(Error::<T>::BadgeNotFound)?;
        ensure!(badge.owner == holder, Error::<T>::NotBadgeOwner);

        if holder != to {
            let received = BadgesOwned::<T>::get(&to).checked_add(1).ok_or(Error::<T>::Overflow)?;
            let kept = BadgesOwned::<T>::get(&holder).saturating_sub(1);
            BadgesOwned::<T>::insert(&to, received);
            if kept == 0 {
                BadgesOwned::<T>::remove(&holder);
            } else {
                BadgesOwned::<T>::insert(&holder, kept);
            }
            badge.owner = to.clone();
            Badges::<T>::insert(id, badge);
        }

        Self::deposit_event(Event::BadgeTransferred { id, from: holder, to });
        Ok(())
    }
}
