use soroban_sdk::{contracttype, Address, String, Symbol};

use crate::storage_types::{CampaignId, EntryIndex};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub target: i128,
    pub deadline: u64,
    pub image: String,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationMadeEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: i128,
    pub agreed: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub entry_index: EntryIndex,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LateDonationPolicyEvent {
    pub admin: Address,
    pub accept_late_donations: bool,
}

pub fn emit_campaign_created(
    env: &soroban_sdk::Env,
    event: CampaignCreatedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_donation_made(
    env: &soroban_sdk::Env,
    event: DonationMadeEvent,
) {
    env.events().publish(
        (Symbol::new(env, "donation_made"),),
        event,
    );
}

pub fn emit_funds_withdrawn(
    env: &soroban_sdk::Env,
    event: FundsWithdrawnEvent,
) {
    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"),),
        event,
    );
}

pub fn emit_refund_issued(
    env: &soroban_sdk::Env,
    event: RefundIssuedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "refund_issued"),),
        event,
    );
}

pub fn emit_late_donation_policy(
    env: &soroban_sdk::Env,
    event: LateDonationPolicyEvent,
) {
    env.events().publish(
        (Symbol::new(env, "late_donation_policy"),),
        event,
    );
}
