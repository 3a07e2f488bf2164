use soroban_sdk::{Address, Env, Vec};

use crate::ledger;
use crate::storage_types::*;
use crate::utils::{extend_instance, extend_persistent};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_config(env: &Env) -> Result<Config, Error> {
    let storage = env.storage().instance();

    let admin: Address = storage.get(&DataKey::Admin).ok_or(Error::NotInitialized)?;
    let token: Address = storage.get(&DataKey::Token).ok_or(Error::NotInitialized)?;
    let accept_late_donations: bool = storage
        .get(&DataKey::AcceptLateDonations)
        .unwrap_or(true);

    Ok(Config {
        admin,
        token,
        accept_late_donations,
    })
}

pub fn write_config(env: &Env, config: &Config) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Admin, &config.admin);
    storage.set(&DataKey::Token, &config.token);
    storage.set(&DataKey::AcceptLateDonations, &config.accept_late_donations);
    extend_instance(env);
}

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Hands out the next sequential campaign ID. IDs start at 0 and are never reused.
pub fn allocate_id(env: &Env) -> Result<CampaignId, Error> {
    let id = campaign_count(env);
    let next = id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    extend_instance(env);
    Ok(id)
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::UnknownCampaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

fn snapshot(env: &Env, campaign: Campaign) -> CampaignSnapshot {
    let donations = ledger::donations(env, &campaign, 0, campaign.donation_count);
    CampaignSnapshot {
        campaign,
        donations,
    }
}

/// Snapshots of up to `limit` campaigns starting at ID `start`, in ID order.
pub fn campaigns_page(env: &Env, start: CampaignId, limit: u32) -> Vec<CampaignSnapshot> {
    let end = start.saturating_add(limit as u64).min(campaign_count(env));
    let mut campaigns = Vec::new(env);
    for id in start..end {
        if let Ok(campaign) = load_campaign(env, id) {
            campaigns.push_back(snapshot(env, campaign));
        }
    }
    campaigns
}

/// Snapshot of every campaign in ID order.
pub fn all_campaigns(env: &Env) -> Vec<CampaignSnapshot> {
    campaigns_page(env, 0, u32::MAX)
}
