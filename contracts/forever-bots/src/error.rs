use bots_allowlist::AllowlistError;
use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Base(#[from] cw721_base::ContractError),

    #[error("InvalidRoot: {0}")]
    InvalidRoot(#[from] AllowlistError),

    #[error("Pre sale not live")]
    PreSaleNotLive {},

    #[error("Public sale not live")]
    PublicSaleNotLive {},

    #[error("Not on whitelist")]
    NotOnWhitelist {},

    #[error("Incorrect funds supplied, got: {got}, expected {expected}")]
    IncorrectPayment { got: u128, expected: u128 },

    #[error("Would exceed mints per wallet limit")]
    MintsPerWalletExceeded {},

    #[error("All tokens have been minted")]
    MaxSupplyExceeded {},

    #[error("Quantity must be greater than zero")]
    ZeroQuantity {},

    #[error("AirDrop requires at least one recipient")]
    EmptyAirDrop {},
}
