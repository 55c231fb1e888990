//! # Species registry
//!
//! Deduplicating store of species creation requests. The same species (a
//! cofactor, a tRNA shared by several isoacceptor reactions, a ribosomal
//! subunit) is requested from many call sites; the registry guarantees it is
//! materialized exactly once.
//!
//! Registration is first-writer-wins: a second `ensure` with the same name is a
//! no-op even if its parameters differ. Machinery species are registered first
//! by the assembler, so their configured initial amounts are the ones that stick.
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// creation parameters of one species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesParams {
    pub compartment: String,
    pub initial_amount: f64,
    pub units: String,
}

impl SpeciesParams {
    pub fn new(compartment: &str, initial_amount: f64, units: &str) -> Self {
        Self {
            compartment: compartment.to_string(),
            initial_amount,
            units: units.to_string(),
        }
    }
}

impl Default for SpeciesParams {
    fn default() -> Self {
        Self::new("c", 0.0, "item")
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: IndexMap<String, SpeciesParams>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self {
            species: IndexMap::new(),
        }
    }

    /// Registers `name` on first call and returns `true`; later calls return
    /// `false` and leave the first registration untouched.
    pub fn ensure(&mut self, name: &str, params: SpeciesParams) -> bool {
        if let Some(existing) = self.species.get(name) {
            if *existing != params {
                debug!(
                    "species '{}' already registered with {:?}; ignoring {:?}",
                    name, existing, params
                );
            }
            return false;
        }
        self.species.insert(name.to_string(), params);
        true
    }

    pub fn exists(&self, name: &str) -> bool {
        self.species.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SpeciesParams> {
        self.species.get(name)
    }

    /// position of the species in registration order (column of the stoichiometric matrix)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.species.get_index_of(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(|k| k.as_str())
    }

    /// species in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpeciesParams)> {
        self.species.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
