#![no_std]

mod address;
mod campaign;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage_types::*;

pub use storage_types::{Campaign, CampaignAddress, CampaignError, CampaignId};

#[contract]
pub struct CampaigningContract;

#[contractimpl]
impl CampaigningContract {
    /// Record the Stellar Asset Contract that carries native value
    pub fn __constructor(env: Env, native_token: Address) {
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        extend_instance(&env);
    }

    /// Register a campaign for `admin` at its derived address.
    ///
    /// `campaign` is the address the caller derived off-chain and must
    /// match the one recomputed here. Returns the bump.
    pub fn create(
        env: Env,
        admin: Address,
        campaign: CampaignId,
        name: String,
        description: String,
        target_amount: i128,
        project_url: String,
        progress_update_url: String,
        project_image_url: String,
        category: String,
    ) -> Result<u32, CampaignError> {
        admin.require_auth();

        campaign::validate_details(
            &name,
            &description,
            target_amount,
            &project_url,
            &progress_update_url,
            &project_image_url,
            &category,
        )?;

        let derived = address::find_campaign_address(&env, &admin)
            .ok_or(CampaignError::AddressDerivationFailed)?;
        if derived.address != campaign {
            return Err(CampaignError::AddressMismatch);
        }

        let key = DataKey::Campaign(campaign.clone());
        if env.storage().persistent().has(&key) {
            return Err(CampaignError::CampaignAlreadyExists);
        }

        let record = Campaign {
            admin: admin.clone(),
            name,
            description,
            target_amount,
            project_url,
            progress_update_url,
            project_image_url,
            category,
            amount_donated: 0,
            amount_withdrawn: 0,
            bump: derived.bump,
        };
        save_campaign(&env, &campaign, &record);
        extend_instance(&env);

        log!(&env, "campaign created", admin, target_amount);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                address: campaign,
                admin,
                target_amount,
            },
        );

        Ok(derived.bump)
    }

    /// Donate `amount` from `donor` into the contract's custody.
    /// Returns the campaign's new donation total.
    pub fn donate(env: Env, donor: Address, campaign: CampaignId, amount: i128) -> Result<i128, CampaignError> {
        donor.require_auth();

        let record = load_campaign(&env, &campaign)?;
        address::verify_campaign_address(&env, &record, &campaign)?;
        let updated = campaign::apply_donation(&record, amount)?;

        campaign::transfer_native(&env, &donor, &env.current_contract_address(), amount)?;

        save_campaign(&env, &campaign, &updated);
        extend_instance(&env);

        log!(&env, "campaign donated", donor, amount);
        events::emit_campaign_donated(
            &env,
            events::CampaignDonatedEvent {
                address: campaign,
                donor,
                amount,
                amount_donated: updated.amount_donated,
            },
        );

        Ok(updated.amount_donated)
    }

    /// Pay `amount` out of custody to the campaign admin.
    /// Returns the campaign's new withdrawal total.
    pub fn withdraw(env: Env, requester: Address, campaign: CampaignId, amount: i128) -> Result<i128, CampaignError> {
        requester.require_auth();

        let record = load_campaign(&env, &campaign)?;
        address::verify_campaign_address(&env, &record, &campaign)?;
        let updated = campaign::apply_withdrawal(&record, &requester, amount)?;

        campaign::transfer_native(&env, &env.current_contract_address(), &record.admin, amount)?;

        // Update counters
        save_campaign(&env, &campaign, &updated);
        extend_instance(&env);

        log!(&env, "campaign withdrawn", requester, amount);
        events::emit_campaign_withdrawn(
            &env,
            events::CampaignWithdrawnEvent {
                address: campaign,
                admin: requester,
                amount,
                amount_withdrawn: updated.amount_withdrawn,
            },
        );

        Ok(updated.amount_withdrawn)
    }

    /// View functions
    pub fn campaign_address(env: Env, admin: Address) -> Result<CampaignAddress, CampaignError> {
        address::find_campaign_address(&env, &admin).ok_or(CampaignError::AddressDerivationFailed)
    }

    pub fn get_campaign(env: Env, campaign: CampaignId) -> Result<Campaign, CampaignError> {
        load_campaign(&env, &campaign)
    }

    pub fn get_campaign_by_admin(env: Env, admin: Address) -> Result<Campaign, CampaignError> {
        let derived = address::find_campaign_address(&env, &admin)
            .ok_or(CampaignError::AddressDerivationFailed)?;
        load_campaign(&env, &derived.address)
    }

    pub fn available_balance(env: Env, campaign: CampaignId) -> Result<i128, CampaignError> {
        let record = load_campaign(&env, &campaign)?;
        Ok(campaign::available(&record))
    }

    pub fn native_token(env: Env) -> Result<Address, CampaignError> {
        env.storage()
            .instance()
            .get(&DataKey::NativeToken)
            .ok_or(CampaignError::NotConfigured)
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn load_campaign(env: &Env, campaign: &CampaignId) -> Result<Campaign, CampaignError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign.clone()))
        .ok_or(CampaignError::CampaignNotFound)
}

fn save_campaign(env: &Env, campaign: &CampaignId, record: &Campaign) {
    let key = DataKey::Campaign(campaign.clone());
    env.storage().persistent().set(&key, record);
    env.storage().persistent().extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}
