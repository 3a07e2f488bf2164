#![no_std]

mod authorizer;
mod custody;
mod events;
mod ledger;
mod registry;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use storage_types::{
    Campaign, CampaignId, CampaignSnapshot, Config, Donation, EntryIndex, Error,
};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the contract with its admin, the currency token and the
    /// late donation policy
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        accept_late_donations: bool,
    ) -> Result<(), Error> {
        if registry::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        registry::write_config(
            &env,
            &Config {
                admin: admin.clone(),
                token: token.clone(),
                accept_late_donations,
            },
        );

        log!(&env, "crowdfunding initialized", admin, token);
        Ok(())
    }

    /// Decide whether donations keep flowing once a campaign deadline passes
    pub fn set_late_donation_policy(env: Env, accept: bool) -> Result<(), Error> {
        let mut config = registry::read_config(&env)?;
        config.admin.require_auth();

        config.accept_late_donations = accept;
        registry::write_config(&env, &config);

        events::emit_late_donation_policy(
            &env,
            events::LateDonationPolicyEvent {
                admin: config.admin,
                accept_late_donations: accept,
            },
        );
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        registry::read_config(&env)
    }

    /// Open a new campaign. Returns its sequential ID.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        title: String,
        description: String,
        target: i128,
        deadline: u64,
        image: String,
    ) -> Result<CampaignId, Error> {
        registry::read_config(&env)?;
        owner.require_auth();

        utils::validate_target(target)?;
        if !utils::is_future(&env, deadline) {
            return Err(Error::InvalidDeadline);
        }

        let campaign_id = registry::allocate_id(&env)?;
        let campaign = Campaign {
            id: campaign_id,
            owner: owner.clone(),
            title: title.clone(),
            description: description.clone(),
            target,
            deadline,
            image: image.clone(),
            amount_collected: 0,
            completed: false,
            donation_count: 0,
            agreed_count: 0,
        };
        registry::save_campaign(&env, &campaign);

        log!(&env, "campaign created", campaign_id, owner, target, deadline);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                owner,
                title,
                description,
                target,
                deadline,
                image,
            },
        );

        Ok(campaign_id)
    }

    /// Donate `amount` to a campaign, voting whether funds may be released
    /// short of target
    pub fn donate(
        env: Env,
        donor: Address,
        campaign_id: CampaignId,
        agreed: bool,
        amount: i128,
    ) -> Result<(), Error> {
        let config = registry::read_config(&env)?;
        donor.require_auth();

        let mut campaign = registry::load_campaign(&env, campaign_id)?;
        utils::validate_amount(amount)?;
        ledger::ensure_accepting(&env, &config, &campaign)?;

        let entry_index =
            ledger::record_donation(&env, &mut campaign, donor.clone(), amount, agreed)?;

        custody::collect(&env, &config.token, &donor, amount);
        registry::save_campaign(&env, &campaign);

        log!(&env, "donation recorded", campaign_id, entry_index, amount, agreed);

        events::emit_donation_made(
            &env,
            events::DonationMadeEvent {
                campaign_id,
                donor,
                amount,
                agreed,
            },
        );
        Ok(())
    }

    /// Release the whole pool to the campaign owner. One-shot.
    pub fn withdraw(env: Env, caller: Address, campaign_id: CampaignId) -> Result<(), Error> {
        let config = registry::read_config(&env)?;
        caller.require_auth();

        let mut campaign = registry::load_campaign(&env, campaign_id)?;
        let amount = authorizer::authorize_withdrawal(&env, &campaign, &caller)?;

        campaign.amount_collected = 0;
        campaign.completed = true;

        custody::pay_out(&env, &config.token, &campaign.owner, amount);
        registry::save_campaign(&env, &campaign);

        log!(&env, "campaign completed", campaign_id, amount);

        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                campaign_id,
                owner: campaign.owner,
                amount,
            },
        );
        Ok(())
    }

    /// Return every unrefunded dissenting donation of `donor`. Returns the
    /// total sent back.
    pub fn refund(env: Env, donor: Address, campaign_id: CampaignId) -> Result<i128, Error> {
        let config = registry::read_config(&env)?;
        donor.require_auth();

        let mut campaign = registry::load_campaign(&env, campaign_id)?;
        let entries = authorizer::authorize_refund(&env, &campaign, &donor)?;
        let total = ledger::mark_refunded(&env, &mut campaign, &donor, &entries)?;

        custody::pay_out(&env, &config.token, &donor, total);
        registry::save_campaign(&env, &campaign);

        log!(&env, "refund issued", campaign_id, donor, total);

        for (entry_index, amount) in entries.iter() {
            events::emit_refund_issued(
                &env,
                events::RefundIssuedEvent {
                    campaign_id,
                    donor: donor.clone(),
                    entry_index,
                    amount,
                },
            );
        }
        Ok(total)
    }

    // View functions

    /// Every campaign with its donation entries, in ID order. Bounded by the
    /// host read budget; use `get_campaigns_page` once there are many.
    pub fn get_campaigns(env: Env) -> Vec<CampaignSnapshot> {
        registry::all_campaigns(&env)
    }

    pub fn get_campaigns_page(env: Env, start: CampaignId, limit: u32) -> Vec<CampaignSnapshot> {
        registry::campaigns_page(&env, start, limit)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        registry::load_campaign(&env, campaign_id)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        registry::campaign_count(&env)
    }

    pub fn get_donations(env: Env, campaign_id: CampaignId) -> Result<Vec<Donation>, Error> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        Ok(ledger::donations(&env, &campaign, 0, campaign.donation_count))
    }

    pub fn get_donations_page(
        env: Env,
        campaign_id: CampaignId,
        start: EntryIndex,
        limit: u32,
    ) -> Result<Vec<Donation>, Error> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        Ok(ledger::donations(&env, &campaign, start, limit))
    }

    /// Whether the owner could withdraw right now
    pub fn can_withdraw(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        Ok(authorizer::withdrawal_open(&env, &campaign))
    }

    /// What `refund` would return to `donor` right now
    pub fn refundable_amount(
        env: Env,
        campaign_id: CampaignId,
        donor: Address,
    ) -> Result<i128, Error> {
        let campaign = registry::load_campaign(&env, campaign_id)?;
        if campaign.completed {
            return Ok(0);
        }
        let entries = ledger::refundable_entries(&env, campaign_id, &donor);
        ledger::sum_entries(&entries)
    }

    /// Contract token balance across all campaigns
    pub fn get_pooled_balance(env: Env) -> Result<i128, Error> {
        let config = registry::read_config(&env)?;
        Ok(custody::pooled_balance(&env, &config.token))
    }
}
