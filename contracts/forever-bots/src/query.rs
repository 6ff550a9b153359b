#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Empty, Env, StdError, StdResult, Uint128};
use cw721::{AllNftInfoResponse, Cw721Query, NftInfoResponse};

use crate::{
    ledger::TokenLedger,
    metadata,
    msg::QueryMsg,
    state::{SaleConfig, ADMIN, CONFIG, MINT_COUNT},
    Cw721BotsContract,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::TotalSupply {} => to_binary(&query_total_supply(deps)?),
        QueryMsg::MaxSupply {} => to_binary(&query_config(deps)?.max_supply),
        QueryMsg::Cost {} => to_binary(&query_cost(deps)?),
        QueryMsg::MintsPerWallet {} => to_binary(&query_config(deps)?.mints_per_wallet),
        QueryMsg::Root {} => to_binary(&query_config(deps)?.root),
        QueryMsg::PreSaleStatus {} => to_binary(&query_config(deps)?.pre_sale_active),
        QueryMsg::PublicSaleStatus {} => to_binary(&query_config(deps)?.public_sale_active),
        QueryMsg::BaseTokenUri {} => to_binary(&query_config(deps)?.base_uri),
        QueryMsg::Name {} => to_binary(&Cw721BotsContract::default().contract_info(deps)?.name),
        QueryMsg::Symbol {} => {
            to_binary(&Cw721BotsContract::default().contract_info(deps)?.symbol)
        }
        QueryMsg::BalanceOf { owner } => to_binary(&query_balance_of(deps, owner)?),
        QueryMsg::MintCount { address } => to_binary(&query_mint_count(deps, address)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::NftInfo { token_id } => to_binary(&query_nft_info(deps, token_id)?),
        QueryMsg::AllNftInfo {
            token_id,
            include_expired,
        } => to_binary(&query_all_nft_info(
            deps,
            env,
            token_id,
            include_expired.unwrap_or(false),
        )?),
        _ => Cw721BotsContract::default().query(deps, env, msg.into()),
    }
}

pub fn query_config(deps: Deps) -> StdResult<SaleConfig> {
    CONFIG.load(deps.storage)
}

pub fn query_cost(deps: Deps) -> StdResult<Uint128> {
    Ok(query_config(deps)?.cost)
}

pub fn query_total_supply(deps: Deps) -> StdResult<u64> {
    Cw721BotsContract::default().total_issued(deps.storage)
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    let issued = Cw721BotsContract::default().total_issued(deps.storage)?;
    metadata::token_uri(&config, issued, token_id)
}

pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<u64> {
    let owner = deps.api.addr_validate(&owner)?;
    Cw721BotsContract::default().balance_of(deps.storage, &owner)
}

pub fn query_mint_count(deps: Deps, address: String) -> StdResult<u32> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(MINT_COUNT
        .may_load(deps.storage, &addr)?
        .unwrap_or_default())
}

fn parse_token_id(token_id: &str) -> StdResult<u64> {
    token_id
        .parse()
        .map_err(|_| StdError::not_found(format!("ForeverBots token {}", token_id)))
}

fn query_nft_info(deps: Deps, token_id: String) -> StdResult<NftInfoResponse<Empty>> {
    let token_uri = query_token_uri(deps, parse_token_id(&token_id)?)?;
    let mut info = Cw721BotsContract::default().nft_info(deps, token_id)?;
    info.token_uri = Some(token_uri);
    Ok(info)
}

fn query_all_nft_info(
    deps: Deps,
    env: Env,
    token_id: String,
    include_expired: bool,
) -> StdResult<AllNftInfoResponse<Empty>> {
    let token_uri = query_token_uri(deps, parse_token_id(&token_id)?)?;
    let mut res =
        Cw721BotsContract::default().all_nft_info(deps, env, token_id, include_expired)?;
    res.info.token_uri = Some(token_uri);
    Ok(res)
}
