use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub address: CampaignId,
    pub admin: Address,
    pub target_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignDonatedEvent {
    pub address: CampaignId,
    pub donor: Address,
    pub amount: i128,
    pub amount_donated: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignWithdrawnEvent {
    pub address: CampaignId,
    pub admin: Address,
    pub amount: i128,
    pub amount_withdrawn: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_donated(env: &Env, event: CampaignDonatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_donated"),),
        event,
    );
}

pub fn emit_campaign_withdrawn(env: &Env, event: CampaignWithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_withdrawn"),),
        event,
    );
}
