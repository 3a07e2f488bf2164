use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    AcceptLateDonations,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Donation(CampaignId, EntryIndex),
    DissentingEntries(CampaignId, Address), // unrefunded disagree entries of one donor
}

pub type CampaignId = u64;
pub type EntryIndex = u32;

/// A single contribution, stored under `PersistentKey::Donation`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Donation {
    pub donor: Address,
    pub amount: i128,
    pub agreed: bool,   // willing to release funds short of target
    pub refunded: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub target: i128,
    pub deadline: u64,                 // Ledger timestamp, seconds
    pub image: String,
    pub amount_collected: i128,
    pub completed: bool,
    pub donation_count: u32,           // entries ever recorded, refunded included
    pub agreed_count: u32,
}

/// A campaign together with its donation entries, as returned by views.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignSnapshot {
    pub campaign: Campaign,
    pub donations: Vec<Donation>,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    pub token: Address,
    pub accept_late_donations: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    UnknownCampaign = 4,
    InvalidDeadline = 5,
    InvalidTarget = 6,
    InvalidAmount = 7,
    CampaignCompleted = 8,
    DeadlineNotReached = 9,
    QuorumNotMet = 10,
    NoRefundableDonation = 11,
    DonationsClosed = 12,
    ArithmeticOverflow = 13,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_THRESHOLD: u32 = 17280 * 7; // bump when under a week left
