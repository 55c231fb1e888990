//! # Position chain
//!
//! A position species `<protein>_p<i>` stands for a ribosome that has
//! synthesized the first `i` residues of the protein; `<protein>_pF` is the
//! post-chain position that termination consumes. A protein of length L has
//! L + 1 positions.
//!
//! Residue i with carriers c_1..c_k gives k parallel elongation reactions from
//! p_i to p_(i+1) (or pF for the last residue), one per isoacceptor:
//! ```text
//! p_i + aminoacylated_c + 2 GTP + EF-G + EF-Tu + 2 H2O
//!     -> p_(i+1) + c + 2 GDP + 2 PI + EF-G + EF-Tu + 2 H
//! ```
use crate::Translation::carrier_map::CarrierMap;
use crate::Translation::errors::TranslationError;
use crate::Translation::network_builder::NetworkBuilder;
use crate::Translation::protein::Protein;
use crate::Translation::reaction_set::{Participant, RateLaw, Reaction, ReactionId};
use crate::library_manager::GeneratorConfig;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionIndex {
    Residue(usize),
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub protein: String,
    pub index: PositionIndex,
}

impl Position {
    pub fn residue(protein: &str, index: usize) -> Self {
        Self {
            protein: protein.to_string(),
            index: PositionIndex::Residue(index),
        }
    }

    pub fn terminal(protein: &str) -> Self {
        Self {
            protein: protein.to_string(),
            index: PositionIndex::Terminal,
        }
    }

    /// position reached after adding residue `index` to a chain of `length` residues
    pub fn after(protein: &str, index: usize, length: usize) -> Self {
        if index + 1 >= length {
            Self::terminal(protein)
        } else {
            Self::residue(protein, index + 1)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            PositionIndex::Residue(i) => write!(f, "{}_p{}", self.protein, i),
            PositionIndex::Terminal => write!(f, "{}_pF", self.protein),
        }
    }
}

/// all positions of a protein, p0 first and pF last
pub fn positions(protein: &Protein) -> Vec<Position> {
    (0..protein.len())
        .map(|i| Position::residue(&protein.id, i))
        .chain(std::iter::once(Position::terminal(&protein.id)))
        .collect()
}

/// Checks that every residue has a carrier. Fails on the first residue that does not.
pub fn check_sequence(protein: &Protein, carriers: &CarrierMap) -> Result<(), TranslationError> {
    if protein.is_empty() {
        return Err(TranslationError::EmptySequence {
            protein: protein.id.clone(),
        });
    }
    for (i, code) in protein.sequence.iter().enumerate() {
        carriers
            .carriers_for(*code)
            .map_err(|e| e.at_residue(&protein.id, i))?;
    }
    Ok(())
}

pub fn elongation_reaction(
    config: &GeneratorConfig,
    id: ReactionId,
    source: &Position,
    destination: &Position,
    carrier: &str,
) -> Reaction {
    let m = &config.machinery;
    let source = source.to_string();
    let loaded = CarrierMap::loaded_carrier(carrier);
    Reaction::new(
        id,
        vec![
            Participant::new(&source),
            Participant::new(&loaded),
            Participant::with_stoichiometry(&m.gtp, 2),
            Participant::new(&m.elongation_factor_g),
            Participant::new(&m.elongation_factor_tu),
            Participant::with_stoichiometry(&m.water, 2),
        ],
        vec![
            Participant::new(&destination.to_string()),
            Participant::new(carrier),
            Participant::with_stoichiometry(&m.gdp, 2),
            Participant::with_stoichiometry(&m.phosphate, 2),
            Participant::new(&m.elongation_factor_g),
            Participant::new(&m.elongation_factor_tu),
            Participant::with_stoichiometry(&m.proton, 2),
        ],
        RateLaw::new(
            &config.rate_constant,
            &[
                &m.gtp,
                &m.gtp,
                &m.elongation_factor_g,
                &m.elongation_factor_tu,
                &source,
            ],
        ),
    )
}

/// Registers the tRNA species `protein` needs, loaded and unloaded.
/// Registering them ahead of every position lets a position or finished-protein
/// name that equals a carrier surface as a collision.
pub fn register_carriers(
    net: &mut NetworkBuilder,
    protein: &Protein,
) -> Result<(), TranslationError> {
    for (index, code) in protein.sequence.iter().enumerate() {
        let carriers = net
            .carriers
            .carriers_for(*code)
            .map_err(|e| e.at_residue(&protein.id, index))?
            .to_vec();
        for carrier in &carriers {
            net.register(carrier);
            net.register(&CarrierMap::loaded_carrier(carrier));
        }
    }
    Ok(())
}

/// Claims the positions of `protein` and emits its elongation reactions.
/// Returns the number of elongation reactions emitted.
pub fn build_position_chain(
    net: &mut NetworkBuilder,
    protein: &Protein,
) -> Result<usize, TranslationError> {
    check_sequence(protein, net.carriers)?;
    for position in positions(protein) {
        net.claim(&position.to_string())?;
    }
    let length = protein.len();
    let mut emitted = 0;
    for (index, code) in protein.sequence.iter().enumerate() {
        let source = Position::residue(&protein.id, index);
        let destination = Position::after(&protein.id, index, length);
        let carriers = net
            .carriers
            .carriers_for(*code)
            .map_err(|e| e.at_residue(&protein.id, index))?
            .to_vec();
        for (rank, carrier) in carriers.iter().enumerate() {
            let id = ReactionId::Elongation {
                protein: protein.id.clone(),
                index,
                amino_acid: *code,
                rank: rank + 1,
            };
            let reaction = elongation_reaction(net.config, id, &source, &destination, carrier);
            net.emit(reaction)?;
            emitted += 1;
        }
    }
    debug!(
        "{}: {} positions, {} elongation reactions",
        protein.id,
        length + 1,
        emitted
    );
    Ok(emitted)
}
