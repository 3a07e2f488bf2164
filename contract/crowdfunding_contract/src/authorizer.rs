use soroban_sdk::{Address, Env, Vec};

use crate::ledger;
use crate::storage_types::*;
use crate::utils::deadline_reached;

/// Strict majority of donation entries voted to agree. Counts entries, not
/// donors, and ignores amounts. Refunded entries still count.
pub fn has_majority(agreed: u32, total: u32) -> bool {
    (agreed as u64) * 2 > total as u64
}

/// Target reached, or contributors agreed to release short of it.
pub fn release_condition_met(campaign: &Campaign) -> bool {
    campaign.amount_collected >= campaign.target
        || has_majority(campaign.agreed_count, campaign.donation_count)
}

/// Checks every withdrawal precondition and returns the amount to pay out.
pub fn authorize_withdrawal(
    env: &Env,
    campaign: &Campaign,
    caller: &Address,
) -> Result<i128, Error> {
    if *caller != campaign.owner {
        return Err(Error::Unauthorized);
    }
    if campaign.completed {
        return Err(Error::CampaignCompleted);
    }
    if !deadline_reached(env, campaign.deadline) {
        return Err(Error::DeadlineNotReached);
    }
    if !release_condition_met(campaign) {
        return Err(Error::QuorumNotMet);
    }
    Ok(campaign.amount_collected)
}

/// Same gate as `authorize_withdrawal` without the owner check.
pub fn withdrawal_open(env: &Env, campaign: &Campaign) -> bool {
    !campaign.completed
        && deadline_reached(env, campaign.deadline)
        && release_condition_met(campaign)
}

/// Entries `donor` may reclaim right now. Never empty on success.
pub fn authorize_refund(
    env: &Env,
    campaign: &Campaign,
    donor: &Address,
) -> Result<Vec<(EntryIndex, i128)>, Error> {
    if campaign.completed {
        return Err(Error::CampaignCompleted);
    }
    let entries = ledger::refundable_entries(env, campaign.id, donor);
    if entries.is_empty() {
        return Err(Error::NoRefundableDonation);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_needs_more_than_half() {
        assert!(has_majority(2, 3));
        assert!(has_majority(1, 1));
        assert!(!has_majority(1, 2));
        assert!(!has_majority(2, 4));
        assert!(!has_majority(0, 1));
        assert!(!has_majority(0, 0));
    }

    #[test]
    fn majority_does_not_overflow() {
        assert!(has_majority(u32::MAX, u32::MAX));
        assert!(!has_majority(u32::MAX / 2, u32::MAX));
        assert!(has_majority(u32::MAX / 2 + 1, u32::MAX));
    }
}
