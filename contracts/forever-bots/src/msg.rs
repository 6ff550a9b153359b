use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Empty, Uint128};
use cw721::{
    AllNftInfoResponse, ApprovalResponse, ApprovalsResponse, ContractInfoResponse, Expiration,
    NftInfoResponse, NumTokensResponse, OperatorsResponse, OwnerOfResponse, TokensResponse,
};
use cw721_base::{
    ExecuteMsg as Cw721ExecuteMsg, MinterResponse, QueryMsg as Cw721QueryMsg,
};
use cw_controllers::AdminResponse;

use crate::state::SaleConfig;

#[cw_serde]
pub struct InstantiateMsg {
    /// Used as the base URI until the collection is revealed
    pub pre_reveal_uri: String,
    /// Defaults to the full collection size
    pub max_supply: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Presale mint, requires a proof that the sender is on the allowlist
    WhitelistMint { quantity: u32, proof: Vec<String> },
    /// Public sale mint
    Mint { quantity: u32 },
    /// Admin issues one token to each recipient, free of charge and quota
    AirDrop { recipients: Vec<String> },
    SetCost { cost: Uint128 },
    SetMintsPerWallet { mints_per_wallet: u32 },
    /// Replace the allowlist root (hex, optional `0x` prefix)
    SetRoot { root: String },
    SetPreSaleStatus { status: bool },
    SetPublicSaleStatus { status: bool },
    SetBaseUri { base_uri: String },
    /// Hand over the admin role, or renounce it with `None`
    UpdateAdmin { admin: Option<String> },
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted Approval
    Revoke { spender: String, token_id: String },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
}

impl From<ExecuteMsg> for Cw721ExecuteMsg<Empty, Empty> {
    fn from(msg: ExecuteMsg) -> Cw721ExecuteMsg<Empty, Empty> {
        match msg {
            ExecuteMsg::TransferNft {
                recipient,
                token_id,
            } => Cw721ExecuteMsg::TransferNft {
                recipient,
                token_id,
            },
            ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            } => Cw721ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            },
            ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            } => Cw721ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            },
            ExecuteMsg::Revoke { spender, token_id } => {
                Cw721ExecuteMsg::Revoke { spender, token_id }
            }
            ExecuteMsg::ApproveAll { operator, expires } => {
                Cw721ExecuteMsg::ApproveAll { operator, expires }
            }
            ExecuteMsg::RevokeAll { operator } => Cw721ExecuteMsg::RevokeAll { operator },
            _ => unreachable!("mint and admin messages are handled by the minter"),
        }
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Metadata URI of a minted token
    #[returns(String)]
    TokenUri { token_id: u64 },
    /// Number of tokens issued so far
    #[returns(u64)]
    TotalSupply {},
    #[returns(u64)]
    MaxSupply {},
    #[returns(Uint128)]
    Cost {},
    #[returns(u32)]
    MintsPerWallet {},
    #[returns(Option<String>)]
    Root {},
    #[returns(bool)]
    PreSaleStatus {},
    #[returns(bool)]
    PublicSaleStatus {},
    #[returns(String)]
    BaseTokenUri {},
    #[returns(String)]
    Name {},
    #[returns(String)]
    Symbol {},
    /// Number of tokens held by `owner`
    #[returns(u64)]
    BalanceOf { owner: String },
    /// Tokens minted by `address` against the per wallet quota
    #[returns(u32)]
    MintCount { address: String },
    #[returns(SaleConfig)]
    Config {},
    #[returns(AdminResponse)]
    Admin {},
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(ApprovalResponse)]
    Approval {
        token_id: String,
        spender: String,
        include_expired: Option<bool>,
    },
    #[returns(ApprovalsResponse)]
    Approvals {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(OperatorsResponse)]
    AllOperators {
        owner: String,
        include_expired: Option<bool>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    /// Same as the base query, with the URI resolved from the current base URI
    #[returns(NftInfoResponse<Empty>)]
    NftInfo { token_id: String },
    #[returns(AllNftInfoResponse<Empty>)]
    AllNftInfo {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(MinterResponse)]
    Minter {},
}

impl From<QueryMsg> for Cw721QueryMsg<Empty> {
    fn from(msg: QueryMsg) -> Cw721QueryMsg<Empty> {
        match msg {
            QueryMsg::OwnerOf {
                token_id,
                include_expired,
            } => Cw721QueryMsg::OwnerOf {
                token_id,
                include_expired,
            },
            QueryMsg::Approval {
                token_id,
                spender,
                include_expired,
            } => Cw721QueryMsg::Approval {
                token_id,
                spender,
                include_expired,
            },
            QueryMsg::Approvals {
                token_id,
                include_expired,
            } => Cw721QueryMsg::Approvals {
                token_id,
                include_expired,
            },
            QueryMsg::AllOperators {
                owner,
                include_expired,
                start_after,
                limit,
            } => Cw721QueryMsg::AllOperators {
                owner,
                include_expired,
                start_after,
                limit,
            },
            QueryMsg::NumTokens {} => Cw721QueryMsg::NumTokens {},
            QueryMsg::ContractInfo {} => Cw721QueryMsg::ContractInfo {},
            QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            } => Cw721QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            },
            QueryMsg::AllTokens { start_after, limit } => {
                Cw721QueryMsg::AllTokens { start_after, limit }
            }
            QueryMsg::Minter {} => Cw721QueryMsg::Minter {},
            _ => unreachable!("collection queries are answered by the minter"),
        }
    }
}

#[cw_serde]
pub struct MigrateMsg {}
