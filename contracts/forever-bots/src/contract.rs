#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    Addr, Deps, DepsMut, Env, Event, MessageInfo, StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw721_base::InstantiateMsg as Cw721InstantiateMsg;
use cw_utils::{maybe_addr, may_pay, nonpayable};
use semver::Version;
use sg_std::{Response, NATIVE_DENOM};

use bots_allowlist::{parse_digest, parse_proof, to_hex, verify};

use crate::error::ContractError;
use crate::ledger::TokenLedger;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{SaleConfig, ADMIN, CONFIG, MINT_COUNT};
use crate::Cw721BotsContract;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:forever-bots";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COLLECTION_NAME: &str = "ForeverBots";
pub const COLLECTION_SYMBOL: &str = "BOTS";

pub const DEFAULT_MAX_SUPPLY: u64 = 5000;
/// 0.2 STARS
pub const DEFAULT_COST: u128 = 200_000;
pub const DEFAULT_MINTS_PER_WALLET: u32 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // the collection only accepts mints from this contract
    Cw721BotsContract::default().instantiate(
        deps.branch(),
        env.clone(),
        info.clone(),
        Cw721InstantiateMsg {
            name: COLLECTION_NAME.to_string(),
            symbol: COLLECTION_SYMBOL.to_string(),
            minter: env.contract.address.to_string(),
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ADMIN.set(deps.branch(), Some(info.sender.clone()))?;

    let config = SaleConfig {
        cost: Uint128::from(DEFAULT_COST),
        mints_per_wallet: DEFAULT_MINTS_PER_WALLET,
        max_supply: msg.max_supply.unwrap_or(DEFAULT_MAX_SUPPLY),
        pre_sale_active: false,
        public_sale_active: false,
        root: None,
        base_uri: msg.pre_reveal_uri.clone(),
        pre_reveal_uri: msg.pre_reveal_uri,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("max_supply", config.max_supply.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::WhitelistMint { quantity, proof } => {
            execute_whitelist_mint(deps, info, quantity, proof)
        }
        ExecuteMsg::Mint { quantity } => execute_mint(deps, info, quantity),
        ExecuteMsg::AirDrop { recipients } => execute_air_drop(deps, info, recipients),
        ExecuteMsg::SetCost { cost } => execute_set_cost(deps, info, cost),
        ExecuteMsg::SetMintsPerWallet { mints_per_wallet } => {
            execute_set_mints_per_wallet(deps, info, mints_per_wallet)
        }
        ExecuteMsg::SetRoot { root } => execute_set_root(deps, info, root),
        ExecuteMsg::SetPreSaleStatus { status } => {
            execute_set_pre_sale_status(deps, info, status)
        }
        ExecuteMsg::SetPublicSaleStatus { status } => {
            execute_set_public_sale_status(deps, info, status)
        }
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::UpdateAdmin { admin } => {
            Ok(ADMIN.execute_update_admin(deps, info, maybe_addr(api, admin)?)?)
        }
        _ => Cw721BotsContract::default()
            .execute(deps, env, info, msg.into())
            .map_err(|e| e.into()),
    }
}

pub fn execute_whitelist_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.pre_sale_active {
        return Err(ContractError::PreSaleNotLive {});
    }
    if !is_allowlisted(&config, &info.sender, &proof)? {
        return Err(ContractError::NotOnWhitelist {});
    }

    mint_to_sender(deps, info, &config, quantity, "whitelist_mint")
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.public_sale_active {
        return Err(ContractError::PublicSaleNotLive {});
    }

    mint_to_sender(deps, info, &config, quantity, "mint")
}

/// A malformed proof never matches, so it is reported like any other non-member.
fn is_allowlisted(
    config: &SaleConfig,
    sender: &Addr,
    proof: &[String],
) -> Result<bool, ContractError> {
    let root = match &config.root {
        Some(root) => parse_digest(root)?,
        None => return Ok(false),
    };
    let proof = match parse_proof(proof) {
        Ok(proof) => proof,
        Err(_) => return Ok(false),
    };

    Ok(verify(&root, &proof, sender.as_str()))
}

/// Payment, quota and supply checks shared by both sale phases, in that order.
/// Nothing is written until all of them pass.
fn mint_to_sender(
    deps: DepsMut,
    info: MessageInfo,
    config: &SaleConfig,
    quantity: u32,
    action: &str,
) -> Result<Response, ContractError> {
    if quantity == 0 {
        return Err(ContractError::ZeroQuantity {});
    }

    let expected = config
        .cost
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::from)?;
    let paid = may_pay(&info, NATIVE_DENOM)?;
    if paid != expected {
        return Err(ContractError::IncorrectPayment {
            got: paid.u128(),
            expected: expected.u128(),
        });
    }

    let minted = MINT_COUNT
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if minted.saturating_add(quantity) > config.mints_per_wallet {
        return Err(ContractError::MintsPerWalletExceeded {});
    }

    let ledger = Cw721BotsContract::default();
    check_supply(deps.as_ref(), &ledger, config, u64::from(quantity))?;

    MINT_COUNT.save(deps.storage, &info.sender, &(minted + quantity))?;
    let token_ids = (0..quantity)
        .map(|_| ledger.issue(deps.storage, &info.sender))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new()
        .add_attribute("action", action)
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("token_ids", join_ids(&token_ids))
        .add_attribute("paid", paid.to_string()))
}

fn check_supply(
    deps: Deps,
    ledger: &impl TokenLedger,
    config: &SaleConfig,
    quantity: u64,
) -> Result<(), ContractError> {
    let issued = ledger.total_issued(deps.storage)?;
    if issued.saturating_add(quantity) > config.max_supply {
        return Err(ContractError::MaxSupplyExceeded {});
    }
    Ok(())
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn only_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    ADMIN.assert_admin(deps, &info.sender)?;
    nonpayable(info)?;
    Ok(())
}

/// Issues one token per recipient, skipping phase, payment and quota checks.
/// The whole batch fails if it does not fit under the supply cap.
pub fn execute_air_drop(
    deps: DepsMut,
    info: MessageInfo,
    recipients: Vec<String>,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    if recipients.is_empty() {
        return Err(ContractError::EmptyAirDrop {});
    }

    let recipients = recipients
        .iter()
        .map(|r| deps.api.addr_validate(r))
        .collect::<StdResult<Vec<_>>>()?;

    let config = CONFIG.load(deps.storage)?;
    let ledger = Cw721BotsContract::default();
    check_supply(deps.as_ref(), &ledger, &config, recipients.len() as u64)?;

    let mut token_ids = Vec::with_capacity(recipients.len());
    for recipient in recipients.iter() {
        token_ids.push(ledger.issue(deps.storage, recipient)?);
    }

    let event = Event::new("airdrop")
        .add_attribute("recipients", recipients.len().to_string())
        .add_attribute("token_ids", join_ids(&token_ids))
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_cost(
    deps: DepsMut,
    info: MessageInfo,
    cost: Uint128,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.cost = cost;
        Ok(config)
    })?;

    let event = Event::new("set_cost")
        .add_attribute("cost", cost.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_mints_per_wallet(
    deps: DepsMut,
    info: MessageInfo,
    mints_per_wallet: u32,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.mints_per_wallet = mints_per_wallet;
        Ok(config)
    })?;

    let event = Event::new("set_mints_per_wallet")
        .add_attribute("mints_per_wallet", mints_per_wallet.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Proofs generated against the previous root stop verifying immediately.
pub fn execute_set_root(
    deps: DepsMut,
    info: MessageInfo,
    root: String,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;

    let root = to_hex(&parse_digest(&root)?);
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.root = Some(root.clone());
        Ok(config)
    })?;

    let event = Event::new("set_root")
        .add_attribute("root", root)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_pre_sale_status(
    deps: DepsMut,
    info: MessageInfo,
    status: bool,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.pre_sale_active = status;
        Ok(config)
    })?;

    let event = Event::new("set_pre_sale_status")
        .add_attribute("status", status.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_public_sale_status(
    deps: DepsMut,
    info: MessageInfo,
    status: bool,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.public_sale_active = status;
        Ok(config)
    })?;

    let event = Event::new("set_public_sale_status")
        .add_attribute("status", status.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.base_uri = base_uri.clone();
        Ok(config)
    })?;

    let event = Event::new("set_base_uri")
        .add_attribute("base_uri", base_uri)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(StdError::generic_err("Cannot upgrade to a previous contract version").into());
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    // set new contract version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let event = Event::new("migrate")
        .add_attribute("from_version", current_version.version)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
