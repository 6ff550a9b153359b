use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct SaleConfig {
    /// Price of a single token in `ustars`
    pub cost: Uint128,
    /// Quota shared by presale and public sale mints
    pub mints_per_wallet: u32,
    /// Collection cap, fixed at instantiation
    pub max_supply: u64,
    pub pre_sale_active: bool,
    pub public_sale_active: bool,
    /// Hex encoded allowlist root, unset until the admin configures one
    pub root: Option<String>,
    pub base_uri: String,
    pub pre_reveal_uri: String,
}

pub const CONFIG: Item<SaleConfig> = Item::new("config");

/// Address -> tokens minted through `Mint` and `WhitelistMint`.
/// Airdrops are not counted.
pub const MINT_COUNT: Map<&Addr, u32> = Map::new("mc");

/// Single controller of all administrative messages
pub const ADMIN: Admin = Admin::new("admin");
