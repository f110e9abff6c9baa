use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{pallet_prelude::BoundedVec, traits::fungible::Inspect};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;

use crate::{history::LedgerRecord, tier::Tier, Config};

/// Sequential badge identifier. The first badge is `1`.
pub type BadgeId = u32;

pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
pub type BalanceOf<T> = <<T as Config>::Currency as Inspect<AccountIdOf<T>>>::Balance;

pub type CharityName<T> = BoundedVec<u8, <T as Config>::MaxNameLength>;
pub type BadgeMessage<T> = BoundedVec<u8, <T as Config>::MaxMessageLength>;
pub type TierUri<T> = BoundedVec<u8, <T as Config>::MaxUriLength>;

pub type BadgeRecordOf<T> =
    BadgeRecord<AccountIdOf<T>, BalanceOf<T>, CharityName<T>, BadgeMessage<T>>;
pub type LedgerRecordOf<T> =
    LedgerRecord<AccountIdOf<T>, BalanceOf<T>, CharityName<T>, BadgeMessage<T>, TierUri<T>>;

/// A minted badge.
///
/// Only `owner` changes after minting. The metadata URI is not stored here;
/// it is resolved through `tier` whenever it is read.
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct BadgeRecord<AccountId, Balance, Name, Message> {
    pub owner: AccountId,
    /// Payment that produced the badge, stored verbatim.
    pub amount: Balance,
    pub tier: Tier,
    /// Charity the payment was made to.
    pub charity: Name,
    pub message: Message,
    /// Unix time in seconds.
    pub created_at: u64,
}
