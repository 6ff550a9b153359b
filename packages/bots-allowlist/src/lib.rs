//! Allowlist commitments for presale minting.
//!
//! An allowlist is committed to as the root of a binary Keccak-256 Merkle tree
//! whose leaves are `keccak256(address)`. Each pair of children is sorted
//! before it is hashed, so a proof is just the list of sibling hashes from the
//! leaf up to the root, with no left/right markers.

use sha3::{Digest, Keccak256};
use thiserror::Error;

mod tree;

pub use tree::MerkleTree;

/// A 32 byte Keccak-256 digest
pub type Hash = [u8; 32];

#[derive(Error, Debug, PartialEq)]
pub enum AllowlistError {
    #[error("{0}")]
    Hex(#[from] hex::FromHexError),

    #[error("InvalidDigestLength: expected 32 bytes, got {0}")]
    InvalidDigestLength(usize),
}

/// Leaf digest for an address
pub fn leaf_hash(address: &str) -> Hash {
    Keccak256::digest(address.as_bytes()).into()
}

/// Hashes two sibling nodes in canonical (ascending) order.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

/// Returns true if `proof` links `address` to `root`.
///
/// An empty proof only verifies when the address leaf is itself the root,
/// i.e. a single member allowlist.
pub fn verify(root: &Hash, proof: &[Hash], address: &str) -> bool {
    let computed = proof
        .iter()
        .fold(leaf_hash(address), |node, sibling| hash_pair(&node, sibling));
    &computed == root
}

/// Parses a hex encoded digest, with or without a `0x` prefix.
pub fn parse_digest(input: &str) -> Result<Hash, AllowlistError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(digits)?;
    Hash::try_from(bytes.as_slice()).map_err(|_| AllowlistError::InvalidDigestLength(bytes.len()))
}

pub fn parse_proof<S: AsRef<str>>(proof: &[S]) -> Result<Vec<Hash>, AllowlistError> {
    proof.iter().map(|p| parse_digest(p.as_ref())).collect()
}

pub fn to_hex(digest: &Hash) -> String {
    hex::encode(digest)
}
