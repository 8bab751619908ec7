use super::error::EngineError;
use crate::core::models::atom::Atom;
use crate::core::models::chain::Chain;
use crate::core::models::matrix::DistanceMatrix;
use crate::core::utils::geometry;
use std::collections::{BTreeMap, HashMap};

/// Partitions atoms into chains, in order of first appearance.
///
/// Atoms keep their relative order within each chain, so matrix row `i`
/// always corresponds to the `i`-th qualifying atom of that chain in the
/// source file. Chains whose atoms interleave in the input are still
/// collected correctly.
pub fn group_by_chain(atoms: Vec<Atom>) -> Vec<Chain> {
    let mut chains: Vec<Chain> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for atom in atoms {
        let slot = match index.get(&atom.chain_id) {
            Some(&slot) => slot,
            None => {
                index.insert(atom.chain_id.clone(), chains.len());
                chains.push(Chain::new(&atom.chain_id));
                chains.len() - 1
            }
        };
        chains[slot].push(atom);
    }
    chains
}

/// Computes one symmetric distance matrix per chain.
///
/// Entries are Euclidean distances in Angstroms rounded to two decimals;
/// the diagonal is exactly zero. The returned map is keyed by chain
/// identifier.
pub fn build_matrices(chains: &[Chain]) -> Result<BTreeMap<String, DistanceMatrix>, EngineError> {
    let mut matrices = BTreeMap::new();
    for chain in chains {
        let matrix = chain_matrix(chain)?;
        matrices.insert(chain.id.clone(), matrix);
    }
    Ok(matrices)
}

// The lower triangle mirrors the upper one, so symmetry holds bit for bit
// and each pair distance is computed once.
fn chain_matrix(chain: &Chain) -> Result<DistanceMatrix, EngineError> {
    let atoms = chain.atoms();
    let n = atoms.len();
    let mut flat = vec![0.0; n * n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = geometry::round_to_hundredths(geometry::distance(
                &atoms[i].position,
                &atoms[j].position,
            ));
            flat[i * n + j] = d;
            flat[j * n + i] = d;
        }
    }

    DistanceMatrix::from_flat(flat).map_err(|source| EngineError::MatrixShape {
        chain_id: chain.id.clone(),
        source,
    })
}
