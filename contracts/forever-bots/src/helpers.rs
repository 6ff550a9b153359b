use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, Coin, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};
use serde::de::DeserializeOwned;
use sg_std::CosmosMsg;

use crate::msg::{ExecuteMsg, QueryMsg};
use crate::state::SaleConfig;

/// ForeverBotsContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct ForeverBotsContract(pub Addr);

impl ForeverBotsContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    fn query<T: DeserializeOwned>(&self, querier: &QuerierWrapper, msg: &QueryMsg) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(msg)?,
        }))
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<SaleConfig> {
        self.query(querier, &QueryMsg::Config {})
    }

    pub fn total_supply(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        self.query(querier, &QueryMsg::TotalSupply {})
    }

    pub fn balance_of(&self, querier: &QuerierWrapper, owner: &str) -> StdResult<u64> {
        self.query(
            querier,
            &QueryMsg::BalanceOf {
                owner: owner.to_string(),
            },
        )
    }

    pub fn mint_count(&self, querier: &QuerierWrapper, address: &str) -> StdResult<u32> {
        self.query(
            querier,
            &QueryMsg::MintCount {
                address: address.to_string(),
            },
        )
    }

    pub fn token_uri(&self, querier: &QuerierWrapper, token_id: u64) -> StdResult<String> {
        self.query(querier, &QueryMsg::TokenUri { token_id })
    }
}
