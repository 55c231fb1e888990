//! Termination releases the finished protein from the post-chain position and
//! leaves the release factor bound to both subunits; the shared recycling
//! reaction (`release`) splits that complex back into its parts.
use crate::Translation::errors::TranslationError;
use crate::Translation::network_builder::NetworkBuilder;
use crate::Translation::position_chain::Position;
use crate::Translation::protein::Protein;
use crate::Translation::reaction_set::{Participant, RateLaw, Reaction, ReactionId};
use crate::library_manager::GeneratorConfig;

/// `<protein>_termination`
pub fn termination_reaction(config: &GeneratorConfig, protein: &Protein) -> Reaction {
    let m = &config.machinery;
    let last = Position::terminal(&protein.id).to_string();
    Reaction::new(
        ReactionId::Termination {
            protein: protein.id.clone(),
        },
        vec![
            Participant::new(&last),
            Participant::with_stoichiometry(&m.gtp, 2),
            Participant::new(&m.release_factor),
            Participant::with_stoichiometry(&m.water, 2),
        ],
        vec![
            Participant::new(&protein.id),
            Participant::with_stoichiometry(&m.gdp, 2),
            Participant::with_stoichiometry(&m.phosphate, 2),
            Participant::new(&m.release_complex),
            Participant::with_stoichiometry(&m.proton, 2),
        ],
        RateLaw::new(
            &config.rate_constant,
            &[&m.gtp, &m.gtp, &m.release_factor, &last],
        ),
    )
}

/// `release`: RF1_30S_50S -> RIBOSOME_30S + RIBOSOME_50S + RF1, all 1:1
pub fn recycling_reaction(config: &GeneratorConfig) -> Reaction {
    let m = &config.machinery;
    Reaction::new(
        ReactionId::Recycling,
        vec![Participant::new(&m.release_complex)],
        vec![
            Participant::new(&m.small_subunit),
            Participant::new(&m.large_subunit),
            Participant::new(&m.release_factor),
        ],
        RateLaw::new(&config.rate_constant, &[&m.release_complex]),
    )
}

/// Emits the termination of `protein`; the finished protein species must be new.
pub fn build_termination(
    net: &mut NetworkBuilder,
    protein: &Protein,
) -> Result<(), TranslationError> {
    net.claim(&protein.id)?;
    let reaction = termination_reaction(net.config, protein);
    net.emit(reaction)
}
