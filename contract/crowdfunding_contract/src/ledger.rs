use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::*;
use crate::utils::{deadline_reached, extend_persistent};

/// Whether `campaign` takes new donations under the current policy.
pub fn ensure_accepting(env: &Env, config: &Config, campaign: &Campaign) -> Result<(), Error> {
    if campaign.completed {
        return Err(Error::CampaignCompleted);
    }
    if !config.accept_late_donations && deadline_reached(env, campaign.deadline) {
        return Err(Error::DonationsClosed);
    }
    Ok(())
}

pub fn load_donation(env: &Env, campaign_id: CampaignId, index: EntryIndex) -> Option<Donation> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Donation(campaign_id, index))
}

fn save_donation(env: &Env, campaign_id: CampaignId, index: EntryIndex, donation: &Donation) {
    let key = PersistentKey::Donation(campaign_id, index);
    env.storage().persistent().set(&key, donation);
    extend_persistent(env, &key);
}

/// Indices of the donor's disagree entries that have not been refunded yet.
fn dissenting_entries(env: &Env, campaign_id: CampaignId, donor: &Address) -> Vec<EntryIndex> {
    env.storage()
        .persistent()
        .get(&PersistentKey::DissentingEntries(campaign_id, donor.clone()))
        .unwrap_or(Vec::new(env))
}

/// Stores a new donation entry and updates the campaign counters. Returns
/// the entry index. The caller saves `campaign`.
pub fn record_donation(
    env: &Env,
    campaign: &mut Campaign,
    donor: Address,
    amount: i128,
    agreed: bool,
) -> Result<EntryIndex, Error> {
    let collected = campaign
        .amount_collected
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let index = campaign.donation_count;
    let donation_count = index.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    let agreed_count = if agreed {
        campaign
            .agreed_count
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?
    } else {
        campaign.agreed_count
    };

    if !agreed {
        let key = PersistentKey::DissentingEntries(campaign.id, donor.clone());
        let mut entries = dissenting_entries(env, campaign.id, &donor);
        entries.push_back(index);
        env.storage().persistent().set(&key, &entries);
        extend_persistent(env, &key);
    }

    save_donation(
        env,
        campaign.id,
        index,
        &Donation {
            donor,
            amount,
            agreed,
            refunded: false,
        },
    );

    campaign.amount_collected = collected;
    campaign.donation_count = donation_count;
    campaign.agreed_count = agreed_count;

    Ok(index)
}

/// `(index, amount)` of every unrefunded entry where `donor` voted to disagree.
pub fn refundable_entries(
    env: &Env,
    campaign_id: CampaignId,
    donor: &Address,
) -> Vec<(EntryIndex, i128)> {
    let mut entries = Vec::new(env);
    for index in dissenting_entries(env, campaign_id, donor).iter() {
        if let Some(donation) = load_donation(env, campaign_id, index) {
            if !donation.refunded {
                entries.push_back((index, donation.amount));
            }
        }
    }
    entries
}

pub fn sum_entries(entries: &Vec<(EntryIndex, i128)>) -> Result<i128, Error> {
    let mut total: i128 = 0;
    for (_, amount) in entries.iter() {
        total = total.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// Flags the given entries of `donor` as refunded and takes their sum out of
/// `amount_collected`. Returns the sum. The caller saves `campaign`.
pub fn mark_refunded(
    env: &Env,
    campaign: &mut Campaign,
    donor: &Address,
    entries: &Vec<(EntryIndex, i128)>,
) -> Result<i128, Error> {
    let total = sum_entries(entries)?;
    let collected = campaign
        .amount_collected
        .checked_sub(total)
        .ok_or(Error::ArithmeticOverflow)?;

    let mut refunded = Vec::new(env);
    for (index, _) in entries.iter() {
        let mut donation =
            load_donation(env, campaign.id, index).ok_or(Error::NoRefundableDonation)?;
        donation.refunded = true;
        refunded.push_back((index, donation));
    }

    for (index, donation) in refunded.iter() {
        save_donation(env, campaign.id, index, &donation);
    }
    env.storage()
        .persistent()
        .remove(&PersistentKey::DissentingEntries(campaign.id, donor.clone()));
    campaign.amount_collected = collected;

    Ok(total)
}

/// Up to `limit` entries of `campaign` starting at `start`, in donation order.
pub fn donations(env: &Env, campaign: &Campaign, start: u32, limit: u32) -> Vec<Donation> {
    let end = start.saturating_add(limit).min(campaign.donation_count);
    let mut donations = Vec::new(env);
    for index in start..end {
        if let Some(donation) = load_donation(env, campaign.id, index) {
            donations.push_back(donation);
        }
    }
    donations
}
