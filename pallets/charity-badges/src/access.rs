//! Owner and minter roles.

use frame_support::{ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};

use crate::{Config, Error, Event, Minter, Owner, Pallet, LOG_TARGET};

/// An authority role held by at most one account.
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum Role {
    /// Registry edits, tier URIs, role transfers, pausing.
    Owner,
    /// Badge minting.
    Minter,
}

impl<T: Config> Pallet<T> {
    /// Current holder of `role`, if any.
    pub fn holder(role: Role) -> Option<T::AccountId> {
        match role {
            Role::Owner => Owner::<T>::get(),
            Role::Minter => Minter::<T>::get(),
        }
    }

    /// Signed origin that holds `role`.
    ///
    /// Unsigned origins fail with `BadOrigin`, any other signer with
    /// `Unauthorized`. Root is not accepted.
    pub(crate) fn ensure_role(
        origin: OriginFor<T>,
        role: Role,
    ) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        Self::ensure_holder(&who, role)?;
        Ok(who)
    }

    pub(crate) fn ensure_holder(who: &T::AccountId, role: Role) -> DispatchResult {
        ensure!(Self::holder(role).as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    pub(crate) fn do_transfer_minter(new_minter: T::AccountId) {
        let old_minter = Minter::<T>::get();
        Minter::<T>::put(&new_minter);
        log::debug!(target: LOG_TARGET, "minter role moved from {old_minter:?} to {new_minter:?}");
        Self::deposit_event(Event::MinterTransferred { old_minter, new_minter });
    }

    pub(crate) fn do_transfer_ownership(new_owner: T::AccountId) {
        let old_owner = Owner::<T>::get();
        Owner::<T>::put(&new_owner);
        log::debug!(target: LOG_TARGET, "owner role moved from {old_owner:?} to {new_owner:?}");
        Self::deposit_event(Event::OwnershipTransferred { old_owner, new_owner });
    }
}
