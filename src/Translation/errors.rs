//! Error types of the translation network compiler.
//!
//! Every variant is fatal for a generation run: the assembler never produces a
//! partial model, so callers either get a complete network or one of these.
use crate::Document::DocumentError;
use crate::Utils::load_from_file::LoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    /// a residue has no carrier in the carrier table
    #[error("amino acid '{code}' has no tRNA carrier (protein '{protein}', position {position})")]
    UnknownAminoAcid {
        protein: String,
        position: usize,
        code: char,
    },
    /// two derived identifiers collide (reaction/reaction, reaction/species or species/species)
    #[error("duplicate identifier '{id}'")]
    DuplicateIdentifier { id: String },
    #[error("document library rejected the model: {0}")]
    UnderlyingLibraryFailure(#[from] DocumentError),
    #[error("protein '{protein}' has an empty sequence")]
    EmptySequence { protein: String },
    /// a reaction references a species that was never registered
    #[error("reaction '{reaction}' references unregistered species '{species}'")]
    DanglingSpecies { reaction: String, species: String },
    #[error("invalid carrier table: {0}")]
    InvalidCarrierTable(String),
    #[error("input error: {0}")]
    Input(#[from] LoadError),
    #[error("configuration error: {0}")]
    Config(String),
}

impl TranslationError {
    /// attaches the residue site to an `UnknownAminoAcid` raised by a bare carrier lookup
    pub fn at_residue(self, protein: &str, index: usize) -> Self {
        match self {
            TranslationError::UnknownAminoAcid { code, .. } => TranslationError::UnknownAminoAcid {
                protein: protein.to_string(),
                position: index,
                code,
            },
            other => other,
        }
    }
}
