//! Badge tiers and the donation-amount rule that assigns them.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Badge tier, fixed when the badge is minted.
#[derive(
    Clone,
    Copy,
    Encode,
    Decode,
    DecodeWithMemTracking,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Bronze, Tier::Silver, Tier::Gold];
}

/// Tier earned by a payment of `amount`.
///
/// Total over every amount: anything below `silver` is Bronze, including
/// amounts under the donation minimum that reach `mint` directly.
pub fn tier_for<B: PartialOrd>(amount: B, silver: B, gold: B) -> Tier {
    if amount >= gold {
        Tier::Gold
    } else if amount >= silver {
        Tier::Silver
    } else {
        Tier::Bronze
    }
}
