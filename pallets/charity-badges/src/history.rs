//! Append-only ledger history.
//!
//! Every successful registry mutation, mint and donation appends exactly one
//! [`LedgerRecord`]. Readers rebuild the set of active charities by folding
//! the log in order with [`active_charities`]; nothing else is needed.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use crate::tier::Tier;

/// One entry of the ledger history.
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum LedgerRecord<AccountId, Balance, Name, Message, Uri> {
    CharityAdded {
        name: Name,
        payout: AccountId,
    },
    CharityRemoved {
        name: Name,
    },
    Minted {
        id: u32,
        owner: AccountId,
        tier: Tier,
        uri: Uri,
        message: Message,
        created_at: u64,
    },
    Donation {
        token_id: u32,
        charity_address: AccountId,
        from: AccountId,
        charity_name: Name,
        amount: Balance,
        created_at: u64,
    },
}

/// Discriminant of a [`LedgerRecord`], used to filter the history.
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum RecordKind {
    CharityAdded,
    CharityRemoved,
    Minted,
    Donation,
}

impl<AccountId, Balance, Name, Message, Uri> LedgerRecord<AccountId, Balance, Name, Message, Uri> {
    pub fn kind(&self) -> RecordKind {
        match self {
            LedgerRecord::CharityAdded { .. } => RecordKind::CharityAdded,
            LedgerRecord::CharityRemoved { .. } => RecordKind::CharityRemoved,
            LedgerRecord::Minted { .. } => RecordKind::Minted,
            LedgerRecord::Donation { .. } => RecordKind::Donation,
        }
    }
}

/// Replays `records` in order and returns the charities that are active at the
/// end, in the order they were (last) added.
///
/// A `CharityAdded` for a name that is already active replaces the earlier
/// entry; a `CharityRemoved` drops it. Mint and donation records are ignored.
pub fn active_charities<AccountId, Balance, Name, Message, Uri, I>(
    records: I,
) -> Vec<(Name, AccountId)>
where
    Name: PartialEq,
    I: IntoIterator<Item = LedgerRecord<AccountId, Balance, Name, Message, Uri>>,
{
    records.into_iter().fold(Vec::new(), |mut active, record| {
        match record {
            LedgerRecord::CharityAdded { name, payout } => {
                active.retain(|(existing, _)| existing != &name);
                active.push((name, payout));
            },
            LedgerRecord::CharityRemoved { name } => {
                active.retain(|(existing, _)| existing != &name);
            },
            LedgerRecord::Minted { .. } | LedgerRecord::Donation { .. } => {},
        }
        active
    })
}
