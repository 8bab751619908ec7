use crate::core::models::atom::AtomSiteRecord;
use crate::core::models::matrix::DistanceMatrix;
use crate::engine::distance::{build_matrices, group_by_chain};
use crate::engine::error::EngineError;
use crate::engine::selection::select_alpha_carbons;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Runs the full contact map pipeline over a file's atom-site records.
///
/// The records are filtered down to polymer alpha-carbons, grouped into
/// chains in order of first appearance, and turned into one symmetric
/// distance matrix per chain. An input without any qualifying atoms yields
/// an empty map, which is a normal outcome rather than an error.
///
/// # Errors
///
/// Returns an [`EngineError`] if a selected atom carries an unparseable
/// coordinate or a chain's matrix cannot be shaped; any failure aborts the
/// whole run.
#[instrument(skip_all, name = "contact_map_workflow")]
pub fn run(records: Vec<AtomSiteRecord>) -> Result<BTreeMap<String, DistanceMatrix>, EngineError> {
    info!("Starting contact map generation over {} atom-site records.", records.len());

    // === Phase 1: Alpha-carbon selection ===
    let atoms = select_alpha_carbons(records).collect::<Result<Vec<_>, _>>()?;
    info!("Selected {} alpha-carbon atoms.", atoms.len());

    // === Phase 2: Chain grouping ===
    let chains = group_by_chain(atoms);
    info!("Grouped atoms into {} chains.", chains.len());

    // === Phase 3: Distance matrix construction ===
    let matrices = build_matrices(&chains)?;
    info!("Contact map generation complete: {} matrices built.", matrices.len());

    Ok(matrices)
}
