use super::error::EngineError;
use crate::core::models::atom::{Atom, AtomSiteRecord};
use nalgebra::Point3;

// Both comparisons are case-sensitive: `HETATM` rows and lowercase atom names
// such as `ca` never qualify.
const POLYMER_GROUP: &str = "ATOM";
const ALPHA_CARBON: &str = "CA";

/// Checks whether a record describes a polymer alpha-carbon atom.
pub fn is_alpha_carbon(record: &AtomSiteRecord) -> bool {
    record.group == POLYMER_GROUP && record.atom_name == ALPHA_CARBON
}

/// Filters records down to alpha-carbons and parses their coordinates.
///
/// Record order is preserved. Each qualifying record yields a typed
/// [`Atom`]; a coordinate field that does not parse as a real number yields
/// an [`EngineError::CoordinateParse`] identifying the axis, the raw value,
/// and the chain it belonged to.
pub fn select_alpha_carbons(
    records: impl IntoIterator<Item = AtomSiteRecord>,
) -> impl Iterator<Item = Result<Atom, EngineError>> {
    records.into_iter().filter(is_alpha_carbon).map(|record| {
        let x = parse_coordinate("x", &record.x, &record.chain_id)?;
        let y = parse_coordinate("y", &record.y, &record.chain_id)?;
        let z = parse_coordinate("z", &record.z, &record.chain_id)?;
        Ok(Atom::new(&record.chain_id, Point3::new(x, y, z)))
    })
}

fn parse_coordinate(axis: &'static str, value: &str, chain_id: &str) -> Result<f64, EngineError> {
    value
        .parse::<f64>()
        .map_err(|_| EngineError::CoordinateParse {
            axis,
            value: value.to_string(),
            chain_id: chain_id.to_string(),
        })
}
