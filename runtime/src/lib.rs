#![cfg_attr(not(feature = "std"), no_std)]

//! Charity runtime: the badge ledger composed with native balances,
//! timestamps and multisig accounts.
//!
//! Ledger administration is expected to sit behind a multisig account; there
//! is no sudo and no root bypass for any ledger call.

use frame_support::{
    construct_runtime, derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    PalletId,
};
use sp_runtime::{
    generic,
    traits::{AccountIdLookup, BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};

pub mod genesis;

#[cfg(test)]
mod tests;

pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Balance = u128;
pub type Nonce = u32;
pub type BlockNumber = u32;

/// One native token, 18 decimals.
pub const UNIT: Balance = 1_000_000_000_000_000_000;
pub const MILLI_UNIT: Balance = UNIT / 1_000;
pub const EXISTENTIAL_DEPOSIT: Balance = MILLI_UNIT / 1_000;

pub type Address = MultiAddress<AccountId, ()>;
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;

pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

/// Storage migrations applied on runtime upgrade.
pub type Migrations = (pallet_charity_badges::migrations::v1::MigrateToV1<Runtime>,);

pub type Executive = frame_executive::Executive<
    Runtime,
    Block,
    frame_system::ChainContext<Runtime>,
    Runtime,
    AllPalletsWithSystem,
    Migrations,
>;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Multisig: pallet_multisig,
        CharityBadges: pallet_charity_badges,
    }
);

parameter_types! {
    pub const SS58Prefix: u8 = 42;
}

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type Lookup = AccountIdLookup<AccountId, ()>;
    type BlockHashCount = ConstU32<2400>;
    type AccountData = pallet_balances::AccountData<Balance>;
    type SS58Prefix = SS58Prefix;
}

impl pallet_timestamp::Config for Runtime {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<3_000>;
    type WeightInfo = ();
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type Balance = Balance;
    type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
    type AccountStore = System;
    type WeightInfo = pallet_balances::weights::SubstrateWeight<Runtime>;
}

parameter_types! {
    // Reserved per pending multisig operation, plus per approving signatory.
    pub const DepositBase: Balance = UNIT;
    pub const DepositFactor: Balance = UNIT / 10;
}

impl pallet_multisig::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type RuntimeCall = RuntimeCall;
    type Currency = Balances;
    type DepositBase = DepositBase;
    type DepositFactor = DepositFactor;
    type MaxSignatories = ConstU32<100>;
    type WeightInfo = pallet_multisig::weights::SubstrateWeight<Runtime>;
    type BlockNumberProvider = System;
}

parameter_types! {
    pub const CharityBadgesPalletId: PalletId = PalletId(*b"yotp/bdg");
    pub const MinimumDonation: Balance = 8 * MILLI_UNIT;
    pub const SilverThreshold: Balance = 88 * MILLI_UNIT;
    pub const GoldThreshold: Balance = 888 * MILLI_UNIT;
}

impl pallet_charity_badges::Config for Runtime {
    type Currency = Balances;
    type UnixTime = Timestamp;
    type PalletId = CharityBadgesPalletId;
    type MinimumDonation = MinimumDonation;
    type SilverThreshold = SilverThreshold;
    type GoldThreshold = GoldThreshold;
    type MaxNameLength = ConstU32<64>;
    type MaxMessageLength = ConstU32<256>;
    type MaxUriLength = ConstU32<128>;
    type WeightInfo = pallet_charity_badges::weights::SubstrateWeight<Runtime>;
}
