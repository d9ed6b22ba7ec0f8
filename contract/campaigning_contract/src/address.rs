use curve25519_dalek::edwards::CompressedEdwardsY;
use soroban_sdk::{xdr::ToXdr, Address, Bytes, Env};

use crate::storage_types::{Campaign, CampaignAddress, CampaignError, CampaignId, CAMPAIGN_SEED};

/// Find the canonical address of `admin`'s campaign.
///
/// Bumps are tried from 255 downwards and the first digest that is not a
/// valid Ed25519 point wins, so no keypair can ever sign for the record.
/// The preimage includes this contract's own address, which scopes the
/// derivation to one deployment.
pub fn find_campaign_address(env: &Env, admin: &Address) -> Option<CampaignAddress> {
    (0..=u8::MAX).rev().find_map(|bump| {
        let bump = bump as u32;
        create_campaign_address(env, admin, bump).map(|address| CampaignAddress { address, bump })
    })
}

/// Recompute the candidate for a known bump. `None` if the bump is out of
/// range or the digest lands on the curve.
pub fn create_campaign_address(env: &Env, admin: &Address, bump: u32) -> Option<CampaignId> {
    if bump > u8::MAX as u32 {
        return None;
    }

    let mut preimage = Bytes::from_slice(env, CAMPAIGN_SEED);
    preimage.append(&admin.clone().to_xdr(env));
    preimage.append(&env.current_contract_address().to_xdr(env));
    preimage.push_back(bump as u8);

    let candidate = env.crypto().sha256(&preimage).to_bytes();
    if is_on_curve(&candidate.to_array()) {
        None
    } else {
        Some(candidate)
    }
}

/// Check that `supplied` is where `campaign` must live.
pub fn verify_campaign_address(
    env: &Env,
    campaign: &Campaign,
    supplied: &CampaignId,
) -> Result<(), CampaignError> {
    match create_campaign_address(env, &campaign.admin, campaign.bump) {
        Some(expected) if expected == *supplied => Ok(()),
        _ => Err(CampaignError::AddressMismatch),
    }
}

fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}
