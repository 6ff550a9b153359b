use cosmwasm_std::{StdError, StdResult};

use crate::state::SaleConfig;

/// Composes `base_uri + token_id + ".json"` for an issued token.
///
/// The base URI starts out as the pre-reveal URI and is swapped globally by
/// `SetBaseUri`, so every token resolves against the current value.
pub fn token_uri(config: &SaleConfig, total_issued: u64, token_id: u64) -> StdResult<String> {
    if token_id == 0 || token_id > total_issued {
        return Err(StdError::not_found(format!("ForeverBots token {}", token_id)));
    }
    Ok(format!("{}{}.json", config.base_uri, token_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Uint128;

    fn config(base_uri: &str) -> SaleConfig {
        SaleConfig {
            cost: Uint128::zero(),
            mints_per_wallet: 1,
            max_supply: 5,
            pre_sale_active: false,
            public_sale_active: false,
            root: None,
            base_uri: base_uri.to_string(),
            pre_reveal_uri: "preRevealURI".to_string(),
        }
    }

    #[test]
    fn resolves_against_base_uri() {
        assert_eq!(
            token_uri(&config("preRevealURI"), 1, 1).unwrap(),
            "preRevealURI1.json"
        );
        assert_eq!(
            token_uri(&config("ipfs://bots/"), 3, 3).unwrap(),
            "ipfs://bots/3.json"
        );
    }

    #[test]
    fn rejects_unissued_tokens() {
        let config = config("baseURI");
        for (total, id) in [(0, 1), (2, 0), (2, 3)] {
            let err = token_uri(&config, total, id).unwrap_err();
            assert!(matches!(err, StdError::NotFound { .. }));
        }
    }
}
