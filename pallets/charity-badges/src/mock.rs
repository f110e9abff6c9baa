use crate as pallet_charity_badges;
use crate::{BadgeMessage, CharityName, Tier, TierUri};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        CharityBadges: pallet_charity_badges,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = pallet_balances::AccountData<u64>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

/// One whole token in the mock's 12-decimal currency.
pub const UNIT: u64 = 1_000_000_000_000;

pub const OWNER: u64 = 1;
pub const DONOR: u64 = 2;
pub const CHARITY: u64 = 3;
pub const RECIPIENT: u64 = 4;
pub const OTHER: u64 = 5;

pub const DONOR_FUNDS: u64 = 10 * UNIT;
/// Genesis issuance cap.
pub const MAX_SUPPLY: u32 = 2;
/// 2023-11-14T22:13:20Z, in milliseconds.
pub const NOW_MS: u64 = 1_700_000_000_000;

parameter_types! {
    pub const BadgesPalletId: PalletId = PalletId(*b"py/chbdg");
    pub const MinimumDonation: u64 = 8 * UNIT / 1_000;
    pub const SilverThreshold: u64 = 88 * UNIT / 1_000;
    pub const GoldThreshold: u64 = 888 * UNIT / 1_000;
}

impl pallet_charity_badges::Config for Test {
    type Currency = Balances;
    type UnixTime = Timestamp;
    type PalletId = BadgesPalletId;
    type MinimumDonation = MinimumDonation;
    type SilverThreshold = SilverThreshold;
    type GoldThreshold = GoldThreshold;
    type MaxNameLength = ConstU32<32>;
    type MaxMessageLength = ConstU32<64>;
    type MaxUriLength = ConstU32<96>;
    type WeightInfo = ();
}

pub fn name(raw: &[u8]) -> CharityName<Test> {
    raw.to_vec().try_into().unwrap()
}

pub fn msg(raw: &[u8]) -> BadgeMessage<Test> {
    raw.to_vec().try_into().unwrap()
}

pub fn uri(raw: &[u8]) -> TierUri<Test> {
    raw.to_vec().try_into().unwrap()
}

pub fn doge() -> CharityName<Test> {
    name(b"DogeCharity")
}

pub fn router() -> u64 {
    CharityBadges::router_account()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(pallet_charity_badges::GenesisConfig::<Test> {
        owner: Some(OWNER),
        minter: None,
        max_supply: MAX_SUPPLY,
        tier_uris: vec![
            (Tier::Bronze, b"ipfs://bronze".to_vec()),
            (Tier::Silver, b"ipfs://silver".to_vec()),
            (Tier::Gold, b"ipfs://gold".to_vec()),
        ],
        charities: vec![(b"DogeCharity".to_vec(), CHARITY)],
    })
}

/// Externalities where the ledger was never initialized.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build_ext(Default::default())
}

fn build_ext(badges: pallet_charity_badges::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(DONOR, DONOR_FUNDS), (OTHER, DONOR_FUNDS)],
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    badges.assimilate_storage(&mut t).unwrap();

    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(NOW_MS);
    });
    ext
}
