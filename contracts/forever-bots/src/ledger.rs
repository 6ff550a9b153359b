use cosmwasm_std::{Addr, Empty, Order, StdError, StdResult, Storage};
use cw721_base::state::TokenInfo;

use crate::Cw721BotsContract;

/// Token issuance and ownership primitives the minter relies on.
pub trait TokenLedger {
    /// Issues the next sequential token (ids start at 1) to `owner`.
    fn issue(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<u64>;

    fn balance_of(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<u64>;

    fn total_issued(&self, storage: &dyn Storage) -> StdResult<u64>;
}

impl<'a> TokenLedger for Cw721BotsContract<'a> {
    fn issue(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<u64> {
        let token_id = self.token_count(storage)? + 1;
        let token = TokenInfo {
            owner: owner.clone(),
            approvals: vec![],
            token_uri: None,
            extension: Empty {},
        };

        self.tokens
            .update(storage, &token_id.to_string(), |old| match old {
                Some(_) => Err(StdError::generic_err(format!(
                    "token {} already issued",
                    token_id
                ))),
                None => Ok(token),
            })?;
        self.increment_tokens(storage)?;

        Ok(token_id)
    }

    fn balance_of(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<u64> {
        self.tokens
            .idx
            .owner
            .prefix(owner.clone())
            .keys(storage, None, None, Order::Ascending)
            .map(|key| key.map(|_| 1u64))
            .sum()
    }

    fn total_issued(&self, storage: &dyn Storage) -> StdResult<u64> {
        self.token_count(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn issues_sequential_ids() {
        let mut deps = mock_dependencies();
        let ledger = Cw721BotsContract::default();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");

        assert_eq!(ledger.total_issued(&deps.storage).unwrap(), 0);
        assert_eq!(ledger.issue(&mut deps.storage, &alice).unwrap(), 1);
        assert_eq!(ledger.issue(&mut deps.storage, &bob).unwrap(), 2);
        assert_eq!(ledger.issue(&mut deps.storage, &alice).unwrap(), 3);

        assert_eq!(ledger.total_issued(&deps.storage).unwrap(), 3);
        assert_eq!(ledger.balance_of(&deps.storage, &alice).unwrap(), 2);
        assert_eq!(ledger.balance_of(&deps.storage, &bob).unwrap(), 1);
        assert_eq!(
            ledger
                .balance_of(&deps.storage, &Addr::unchecked("carol"))
                .unwrap(),
            0
        );

        let token = ledger.tokens.load(&deps.storage, "2").unwrap();
        assert_eq!(token.owner, bob);
    }
}
