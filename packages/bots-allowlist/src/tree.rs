use crate::{hash_pair, leaf_hash, to_hex, Hash};

/// Builds allowlist commitments and proofs off chain.
///
/// Layers are hashed pairwise with sorted children. A trailing odd node is
/// carried up to the next layer unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new<S: AsRef<str>>(addresses: &[S]) -> Self {
        let leaves = addresses.iter().map(|a| leaf_hash(a.as_ref())).collect();
        Self::from_leaves(leaves)
    }

    pub fn from_leaves(leaves: Vec<Hash>) -> Self {
        let mut layers = vec![leaves];
        loop {
            let current = &layers[layers.len() - 1];
            if current.len() <= 1 {
                break;
            }
            let next = current
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => hash_pair(&pair[0], right),
                    None => pair[0],
                })
                .collect();
            layers.push(next);
        }
        MerkleTree { layers }
    }

    /// None for an empty tree
    pub fn root(&self) -> Option<Hash> {
        self.layers.last().and_then(|layer| layer.first()).copied()
    }

    pub fn hex_root(&self) -> Option<String> {
        self.root().map(|root| to_hex(&root))
    }

    /// Sibling path for `address`, or None if it is not a leaf of this tree.
    pub fn proof(&self, address: &str) -> Option<Vec<Hash>> {
        let leaf = leaf_hash(address);
        let mut index = self.layers[0].iter().position(|l| *l == leaf)?;

        let mut proof = vec![];
        for layer in &self.layers[..self.layers.len() - 1] {
            if let Some(sibling) = layer.get(index ^ 1) {
                proof.push(*sibling);
            }
            index /= 2;
        }
        Some(proof)
    }

    pub fn hex_proof(&self, address: &str) -> Option<Vec<String>> {
        self.proof(address)
            .map(|proof| proof.iter().map(to_hex).collect())
    }
}
