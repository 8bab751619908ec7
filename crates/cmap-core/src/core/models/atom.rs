use nalgebra::Point3;

/// Represents one row of a structure file's atom-site table, before any interpretation.
///
/// This struct carries the six fields the pipeline cares about exactly as they
/// appear in the file. Coordinates stay as raw text tokens here: numeric
/// interpretation happens during selection, so that a malformed coordinate on a
/// selected atom is a hard error while garbage on rows that are filtered out
/// never matters. CIF null tokens (`.` and `?`) pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomSiteRecord {
    /// The record kind from `group_PDB` (e.g., "ATOM", "HETATM").
    pub group: String,
    /// The atom name from `label_atom_id` (e.g., "CA", "N", "O").
    pub atom_name: String,
    /// The chain identifier from `label_asym_id` (e.g., "A", "B").
    pub chain_id: String,
    /// The raw `Cartn_x` coordinate token.
    pub x: String,
    /// The raw `Cartn_y` coordinate token.
    pub y: String,
    /// The raw `Cartn_z` coordinate token.
    pub z: String,
}

impl AtomSiteRecord {
    /// Creates a new record from the six raw field tokens.
    ///
    /// # Arguments
    ///
    /// * `group` - The record kind token.
    /// * `atom_name` - The atom name token.
    /// * `chain_id` - The chain identifier token.
    /// * `x`, `y`, `z` - The raw coordinate tokens.
    pub fn new(group: &str, atom_name: &str, chain_id: &str, x: &str, y: &str, z: &str) -> Self {
        Self {
            group: group.to_string(),
            atom_name: atom_name.to_string(),
            chain_id: chain_id.to_string(),
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        }
    }
}

/// Represents a selected backbone-marker atom with its parsed position.
///
/// This is what survives selection: the record kind and atom name have already
/// been consumed by the selection predicate, leaving only the chain the atom
/// belongs to and its 3-D coordinates. Atoms are immutable once built and are
/// discarded after matrix construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The identifier of the chain this atom belongs to.
    pub chain_id: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` tagged with its chain.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The identifier of the owning chain.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(chain_id: &str, position: Point3<f64>) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            position,
        }
    }
}
