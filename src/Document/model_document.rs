//! # Model document interface
//!
//! The compiler does not know how a network is stored; it talks to a
//! [`ModelDocument`], the way a kinetic-law library would be driven one creation
//! call at a time. Implementations are expected to reject what a real modeling
//! library rejects: duplicate ids, and references to species, compartments or
//! parameters that were not created first.
//!
//! [`write_file`] serializes a document completely before touching the file
//! system and then moves a temp file into place, so a failed run never leaves a
//! truncated or partial model behind.
use crate::Translation::reaction_set::Reaction;
use crate::Translation::species_registry::SpeciesParams;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("species '{0}' already exists in the document")]
    DuplicateSpecies(String),
    #[error("reaction '{0}' already exists in the document")]
    DuplicateReaction(String),
    #[error("id '{0}' is already used by another model component")]
    DuplicateId(String),
    #[error("'{owner}' references unknown species '{species}'")]
    UnknownSpecies { owner: String, species: String },
    #[error("species '{species}' is placed in unknown compartment '{compartment}'")]
    UnknownCompartment {
        species: String,
        compartment: String,
    },
    #[error("rate law of '{reaction}' uses unknown parameter '{parameter}'")]
    UnknownParameter { reaction: String, parameter: String },
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// model-wide units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelUnits {
    pub time: String,
    pub extent: String,
    pub substance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compartment {
    pub id: String,
    pub size: f64,
    pub spatial_dimensions: u32,
    pub units: String,
    pub constant: bool,
}

/// constant kinetic parameter (rate constant)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub id: String,
    pub value: f64,
    pub units: String,
    pub constant: bool,
}

pub trait ModelDocument {
    fn set_units(&mut self, units: &ModelUnits) -> Result<(), DocumentError>;
    fn create_compartment(&mut self, compartment: &Compartment) -> Result<(), DocumentError>;
    fn create_parameter(&mut self, parameter: &Parameter) -> Result<(), DocumentError>;
    fn create_species(&mut self, name: &str, params: &SpeciesParams) -> Result<(), DocumentError>;
    fn create_reaction(&mut self, reaction: &Reaction) -> Result<(), DocumentError>;
    /// exchange-format bytes of the whole document
    fn serialize(&self) -> Result<Vec<u8>, DocumentError>;
}

/// Serializes `document` and writes it to `path` atomically.
pub fn write_file<D: ModelDocument + ?Sized>(document: &D, path: &Path) -> Result<(), DocumentError> {
    let bytes = document.serialize()?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(&bytes)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| DocumentError::Io(e.error))?;
    Ok(())
}
