use cosmwasm_std::Empty;
use sg_std::StargazeMsgWrapper;

pub mod contract;
mod error;
pub mod helpers;
pub mod ledger;
pub mod metadata;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
pub use helpers::ForeverBotsContract;

/// Base collection holding token ownership, approvals and the token count
pub type Cw721BotsContract<'a> = cw721_base::Cw721Contract<'a, Empty, StargazeMsgWrapper, Empty, Empty>;
