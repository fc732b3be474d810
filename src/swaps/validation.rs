/// Swap parameter validation
///
/// Pure precondition gate run before committing to any network call. Checks
/// run in a fixed order and the first violation wins.
use crate::config::{MAX_SLIPPAGE_PERCENT, MIN_SLIPPAGE_PERCENT};
use crate::errors::SwapError;

use super::types::SwapParams;

pub fn validate_swap_params(params: &SwapParams) -> Result<(), SwapError> {
    if params.account_id.is_empty() {
        return Err(SwapError::Validation("Account ID is required".to_string()));
    }
    if params.token_in.is_empty() {
        return Err(SwapError::Validation("Input token is required".to_string()));
    }
    if params.token_out.is_empty() {
        return Err(SwapError::Validation("Output token is required".to_string()));
    }

    let amount: f64 = params.amount_in.replace(',', "").parse().unwrap_or(0.0);
    if params.amount_in.is_empty() || amount <= 0.0 {
        return Err(SwapError::Validation(
            "Amount must be greater than 0".to_string(),
        ));
    }

    if params.slippage_tolerance < MIN_SLIPPAGE_PERCENT
        || params.slippage_tolerance > MAX_SLIPPAGE_PERCENT
    {
        return Err(SwapError::Validation(
            "Slippage must be between 0.1% and 50%".to_string(),
        ));
    }

    Ok(())
}
