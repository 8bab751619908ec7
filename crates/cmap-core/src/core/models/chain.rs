use super::atom::Atom;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: String,               // Chain identifier (e.g., "A", "B")
    pub(crate) atoms: Vec<Atom>,  // Selected atoms in the order they appear in the file
}

impl Chain {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            atoms: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
