#![no_std]

mod errors;
mod events;
mod storage;
mod token;

use errors::CampaignError;
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::DataKey;
use token::transfer;

pub use storage::Campaign;

/// Maximum campaign duration in seconds (90 days), measured from the moment
/// of launch rather than from `start_at`.
const MAX_DURATION: u64 = 90 * 24 * 60 * 60;

#[contract]
pub struct CrowdfundRegistryContract;

#[contractimpl]
impl CrowdfundRegistryContract {
    /// Initialize the registry with the token all campaigns are denominated in
    ///
    /// The registry keeps no admin role beyond this one-time bootstrap, but
    /// the deployer must still authorize binding the token.
    pub fn initialize(env: Env, deployer: Address, token: Address) -> Result<(), CampaignError> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Token) {
            return Err(CampaignError::AlreadyInitialized);
        }

        // Require deployer authorization
        deployer.require_auth();

        // Store token address and seed the campaign id counter
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);

        Ok(())
    }

    /// Launch a new campaign and return its id
    pub fn launch(
        env: Env,
        creator: Address,
        goal: i128,
        start_at: u64,
        end_at: u64,
    ) -> Result<u64, CampaignError> {
        // Check if contract is initialized
        if !env.storage().instance().has(&DataKey::Token) {
            return Err(CampaignError::NotInitialized);
        }

        // Require creator authorization
        creator.require_auth();

        // A zero goal is permitted, a negative one is not
        if goal < 0 {
            return Err(CampaignError::InvalidAmount);
        }

        // Validate the time window against the current ledger time
        let now = env.ledger().timestamp();
        if start_at < now {
            return Err(CampaignError::StartInPast);
        }
        if end_at < start_at {
            return Err(CampaignError::EndBeforeStart);
        }
        if end_at > now + MAX_DURATION {
            return Err(CampaignError::DurationTooLong);
        }

        // Allocate the next campaign id
        let campaign_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .ok_or(CampaignError::NotInitialized)?;
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &(campaign_id + 1));

        // Store the campaign
        let campaign = Campaign {
            id: campaign_id,
            creator: creator.clone(),
            goal,
            pledged: 0,
            start_at,
            end_at,
            claimed: false,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        events::emit_launched(
            &env,
            events::CampaignLaunchedEvent {
                campaign_id,
                creator,
                goal,
                start_at,
                end_at,
            },
        );

        Ok(campaign_id)
    }

    /// Cancel a campaign that has not started yet (creator only)
    ///
    /// The campaign entry is removed outright: afterwards the id is
    /// indistinguishable from one that was never assigned.
    pub fn cancel(env: Env, caller: Address, campaign_id: u64) -> Result<(), CampaignError> {
        // Require caller authorization
        caller.require_auth();

        // Get campaign
        let campaign: Campaign = env
            .storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)?;

        // Verify creator identity
        if caller != campaign.creator {
            return Err(CampaignError::NotCreator);
        }

        // A campaign that has reached its start may never be cancelled
        if env.ledger().timestamp() >= campaign.start_at {
            return Err(CampaignError::AlreadyStarted);
        }

        // No pledge balances can exist before start_at, so removing the
        // campaign entry erases the campaign's full state
        env.storage()
            .persistent()
            .remove(&DataKey::Campaign(campaign_id));

        events::emit_cancelled(&env, events::CampaignCancelledEvent { campaign_id });

        Ok(())
    }

    /// Pledge `amount` to an open campaign
    pub fn pledge(
        env: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), CampaignError> {
        // Require donor authorization
        donor.require_auth();

        // Validate amount
        if amount <= 0 {
            return Err(CampaignError::InvalidAmount);
        }

        // Get campaign
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)?;

        // Campaign must be open
        let now = env.ledger().timestamp();
        if now < campaign.start_at {
            return Err(CampaignError::NotStarted);
        }
        if now > campaign.end_at {
            return Err(CampaignError::Ended);
        }

        // Update aggregate and per-donor balances
        campaign.pledged += amount;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        let pledge_key = DataKey::Pledge(campaign_id, donor.clone());
        let balance: i128 = env.storage().persistent().get(&pledge_key).unwrap_or(0);
        env.storage()
            .persistent()
            .set(&pledge_key, &(balance + amount));

        // Transfer tokens from donor to contract; a declined transfer traps
        // and rolls back the increments above
        let token: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)?;
        transfer(&env, &token, &donor, &env.current_contract_address(), &amount);

        events::emit_pledged(
            &env,
            events::PledgedEvent {
                campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Take back `amount` of a pledge while the campaign is still open
    pub fn unpledge(
        env: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), CampaignError> {
        // Require donor authorization
        donor.require_auth();

        // Validate amount
        if amount <= 0 {
            return Err(CampaignError::InvalidAmount);
        }

        // Get campaign
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)?;

        // No lower bound against start_at: a pledge cannot exist before the
        // campaign starts, so only the end of the window is checked
        if env.ledger().timestamp() > campaign.end_at {
            return Err(CampaignError::Ended);
        }

        // Check the donor's recorded balance
        let pledge_key = DataKey::Pledge(campaign_id, donor.clone());
        let balance: i128 = env.storage().persistent().get(&pledge_key).unwrap_or(0);
        if balance < amount {
            return Err(CampaignError::InsufficientPledge);
        }

        // Update aggregate and per-donor balances
        campaign.pledged -= amount;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);
        env.storage()
            .persistent()
            .set(&pledge_key, &(balance - amount));

        // Transfer tokens from contract back to donor
        let token: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)?;
        transfer(&env, &token, &env.current_contract_address(), &donor, &amount);

        events::emit_unpledged(
            &env,
            events::UnpledgedEvent {
                campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Withdraw the full pledged amount after a successful campaign (creator only)
    pub fn claim(env: Env, caller: Address, campaign_id: u64) -> Result<(), CampaignError> {
        // Require caller authorization
        caller.require_auth();

        // Get campaign
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)?;

        // Verify creator identity
        if caller != campaign.creator {
            return Err(CampaignError::NotCreator);
        }

        // Campaign must be over and funded
        if env.ledger().timestamp() <= campaign.end_at {
            return Err(CampaignError::NotEnded);
        }
        if campaign.pledged < campaign.goal {
            return Err(CampaignError::GoalNotReached);
        }
        if campaign.claimed {
            return Err(CampaignError::AlreadyClaimed);
        }

        // Mark claimed before moving any value, so a reentrant call observes
        // AlreadyClaimed
        campaign.claimed = true;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        // Transfer the full pledged amount to the creator
        let token: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)?;
        transfer(
            &env,
            &token,
            &env.current_contract_address(),
            &campaign.creator,
            &campaign.pledged,
        );

        events::emit_claimed(&env, events::ClaimedEvent { campaign_id });

        Ok(())
    }

    /// Take back the caller's own pledge after a failed campaign
    ///
    /// A repeat call sees a zero balance and performs a zero-amount transfer,
    /// which is a harmless no-op rather than an error.
    pub fn refund(env: Env, donor: Address, campaign_id: u64) -> Result<i128, CampaignError> {
        // Require donor authorization
        donor.require_auth();

        // Get campaign
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)?;

        // Campaign must be over and below goal
        if env.ledger().timestamp() <= campaign.end_at {
            return Err(CampaignError::NotEnded);
        }
        if campaign.pledged >= campaign.goal {
            return Err(CampaignError::GoalReached);
        }

        // Zero the donor's balance before moving any value; the aggregate is
        // decremented as well so it keeps matching the sum of balances, and
        // it only shrinks, so later refunds still see pledged < goal
        let pledge_key = DataKey::Pledge(campaign_id, donor.clone());
        let balance: i128 = env.storage().persistent().get(&pledge_key).unwrap_or(0);
        env.storage().persistent().remove(&pledge_key);

        campaign.pledged -= balance;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        // Transfer the donor's recorded balance back
        let token: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)?;
        transfer(&env, &token, &env.current_contract_address(), &donor, &balance);

        events::emit_refunded(
            &env,
            events::RefundedEvent {
                campaign_id,
                donor,
                amount: balance,
            },
        );

        Ok(balance)
    }

    /// Get campaign data
    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, CampaignError> {
        env.storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(CampaignError::CampaignNotFound)
    }

    /// Get the amount `donor` currently has pledged to a campaign
    pub fn get_pledge(env: Env, campaign_id: u64, donor: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Pledge(campaign_id, donor))
            .unwrap_or(0)
    }

    /// Get token address
    pub fn get_token(env: Env) -> Result<Address, CampaignError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)
    }
}
