use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

// Storage keys
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    NativeToken,
    Campaign(CampaignId),
}

// Derived campaign address
pub type CampaignId = BytesN<32>;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignAddress {
    pub address: CampaignId,
    pub bump: u32,
}

// One record per admin, stored at the address derived from the admin
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub admin: Address,
    pub name: String,
    pub description: String,
    pub target_amount: i128,           // Advisory goal, in stroops
    pub project_url: String,
    pub progress_update_url: String,
    pub project_image_url: String,
    pub category: String,
    pub amount_donated: i128,
    pub amount_withdrawn: i128,
    pub bump: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    InvalidInput = 1,
    AddressMismatch = 2,
    InvalidAmount = 3,
    Unauthorized = 4,
    InsufficientFunds = 5,
    TransferFailed = 6,
    CampaignNotFound = 7,
    CampaignAlreadyExists = 8,
    ArithmeticOverflow = 9,
    AddressDerivationFailed = 10,
    NotConfigured = 11,
}

// Constants
pub const CAMPAIGN_SEED: &[u8] = b"CAMPAIGNING";
pub const MAX_NAME_LEN: u32 = 64;
pub const MAX_DESCRIPTION_LEN: u32 = 512;
pub const MAX_URL_LEN: u32 = 256;
pub const MAX_CATEGORY_LEN: u32 = 64;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
