use soroban_sdk::{token, Address, Env, String};

use crate::storage_types::*;

/// Reject descriptive fields over their capacity and a negative target
pub fn validate_details(
    name: &String,
    description: &String,
    target_amount: i128,
    project_url: &String,
    progress_update_url: &String,
    project_image_url: &String,
    category: &String,
) -> Result<(), CampaignError> {
    if target_amount < 0 {
        return Err(CampaignError::InvalidInput);
    }

    let within_capacity = name.len() <= MAX_NAME_LEN
        && description.len() <= MAX_DESCRIPTION_LEN
        && project_url.len() <= MAX_URL_LEN
        && progress_update_url.len() <= MAX_URL_LEN
        && project_image_url.len() <= MAX_URL_LEN
        && category.len() <= MAX_CATEGORY_LEN;

    if !within_capacity {
        return Err(CampaignError::InvalidInput);
    }
    Ok(())
}

/// Value the admin may still withdraw
pub fn available(campaign: &Campaign) -> i128 {
    campaign.amount_donated - campaign.amount_withdrawn
}

/// Campaign after a donation of `amount`. Any donor, no cap at the target.
pub fn apply_donation(campaign: &Campaign, amount: i128) -> Result<Campaign, CampaignError> {
    if amount <= 0 {
        return Err(CampaignError::InvalidAmount);
    }

    let mut updated = campaign.clone();
    updated.amount_donated = campaign
        .amount_donated
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticOverflow)?;
    Ok(updated)
}

/// Campaign after `requester` withdraws `amount`.
///
/// Authority is checked before the amount, and the amount before the
/// balance, so a non-admin always sees `Unauthorized`.
pub fn apply_withdrawal(
    campaign: &Campaign,
    requester: &Address,
    amount: i128,
) -> Result<Campaign, CampaignError> {
    if *requester != campaign.admin {
        return Err(CampaignError::Unauthorized);
    }
    if amount <= 0 {
        return Err(CampaignError::InvalidAmount);
    }
    if amount > available(campaign) {
        return Err(CampaignError::InsufficientFunds);
    }

    let mut updated = campaign.clone();
    updated.amount_withdrawn = campaign
        .amount_withdrawn
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticOverflow)?;
    Ok(updated)
}

/// Move native value through the configured token contract
pub fn transfer_native(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), CampaignError> {
    let token_address: Address = env
        .storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(CampaignError::NotConfigured)?;

    let token_client = token::TokenClient::new(env, &token_address);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CampaignError::TransferFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn campaign(env: &Env, admin: &Address) -> Campaign {
        let text = String::from_str(env, "x");
        Campaign {
            admin: admin.clone(),
            name: text.clone(),
            description: text.clone(),
            target_amount: 5_000_000_000,
            project_url: text.clone(),
            progress_update_url: text.clone(),
            project_image_url: text.clone(),
            category: text,
            amount_donated: 0,
            amount_withdrawn: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_donation_accumulates_past_target() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let base = campaign(&env, &admin);

        let once = apply_donation(&base, 4_000_000_000).unwrap();
        let twice = apply_donation(&once, 4_000_000_000).unwrap();

        assert_eq!(twice.amount_donated, 8_000_000_000);
        assert_eq!(twice.amount_withdrawn, 0);
        assert_eq!(base.amount_donated, 0);
    }

    #[test]
    fn test_donation_rejects_non_positive() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let base = campaign(&env, &admin);

        assert_eq!(apply_donation(&base, 0), Err(CampaignError::InvalidAmount));
        assert_eq!(apply_donation(&base, -1), Err(CampaignError::InvalidAmount));
    }

    #[test]
    fn test_donation_overflow() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let mut base = campaign(&env, &admin);
        base.amount_donated = i128::MAX;

        assert_eq!(apply_donation(&base, 1), Err(CampaignError::ArithmeticOverflow));
    }

    #[test]
    fn test_withdrawal_check_order() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let stranger = Address::generate(&env);
        let base = campaign(&env, &admin);

        // Nothing donated, but authority is reported first
        assert_eq!(apply_withdrawal(&base, &stranger, 100), Err(CampaignError::Unauthorized));
        assert_eq!(apply_withdrawal(&base, &stranger, 0), Err(CampaignError::Unauthorized));
        assert_eq!(apply_withdrawal(&base, &admin, 0), Err(CampaignError::InvalidAmount));
        assert_eq!(apply_withdrawal(&base, &admin, 1), Err(CampaignError::InsufficientFunds));
    }

    #[test]
    fn test_partial_withdrawals_never_exceed_donations() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let funded = apply_donation(&campaign(&env, &admin), 100).unwrap();

        let first = apply_withdrawal(&funded, &admin, 60).unwrap();
        assert_eq!(available(&first), 40);
        assert_eq!(apply_withdrawal(&first, &admin, 41), Err(CampaignError::InsufficientFunds));

        let second = apply_withdrawal(&first, &admin, 40).unwrap();
        assert_eq!(second.amount_withdrawn, second.amount_donated);
        assert_eq!(available(&second), 0);
    }

    #[test]
    fn test_validate_details() {
        let env = Env::default();
        let ok = String::from_str(&env, "Green Energy Initiative");
        let long_name = String::from_bytes(&env, &[b'a'; MAX_NAME_LEN as usize + 1]);
        let exact_name = String::from_bytes(&env, &[b'a'; MAX_NAME_LEN as usize]);
        let long_url = String::from_bytes(&env, &[b'u'; MAX_URL_LEN as usize + 1]);

        assert_eq!(validate_details(&ok, &ok, 0, &ok, &ok, &ok, &ok), Ok(()));
        assert_eq!(validate_details(&exact_name, &ok, 1, &ok, &ok, &ok, &ok), Ok(()));
        assert_eq!(
            validate_details(&ok, &ok, -1, &ok, &ok, &ok, &ok),
            Err(CampaignError::InvalidInput)
        );
        assert_eq!(
            validate_details(&long_name, &ok, 1, &ok, &ok, &ok, &ok),
            Err(CampaignError::InvalidInput)
        );
        assert_eq!(
            validate_details(&ok, &ok, 1, &ok, &ok, &long_url, &ok),
            Err(CampaignError::InvalidInput)
        );
    }
}
