//! Initiation: the small subunit loaded with IF3, the large subunit and the
//! initiation factors bind the protein's mRNA and yield position p0.
//!
//! The subunit-assembly reaction that produces the loaded small subunit is
//! shared by every protein and is emitted once by the assembler, never here.
use crate::Translation::errors::TranslationError;
use crate::Translation::network_builder::NetworkBuilder;
use crate::Translation::position_chain::Position;
use crate::Translation::protein::Protein;
use crate::Translation::reaction_set::{Participant, RateLaw, Reaction, ReactionId};
use crate::library_manager::GeneratorConfig;

/// `_30S_assembl`: IF3 + RIBOSOME_30S -> RIBOSOME_30S_IF3
pub fn subunit_assembly(config: &GeneratorConfig) -> Reaction {
    let m = &config.machinery;
    Reaction::new(
        ReactionId::SubunitAssembly,
        vec![
            Participant::new(&m.initiation_factor_3),
            Participant::new(&m.small_subunit),
        ],
        vec![Participant::new(&m.small_subunit_if3)],
        RateLaw::new(
            &config.rate_constant,
            &[&m.initiation_factor_3, &m.small_subunit],
        ),
    )
}

/// `<protein>_Transl_Init`
pub fn initiation_reaction(config: &GeneratorConfig, protein: &Protein) -> Reaction {
    let m = &config.machinery;
    let mrna = protein.mrna_name(&config.monomer_suffix);
    let first = Position::residue(&protein.id, 0).to_string();
    Reaction::new(
        ReactionId::Initiation {
            protein: protein.id.clone(),
        },
        vec![
            Participant::new(&mrna),
            Participant::new(&m.small_subunit_if3),
            Participant::new(&m.large_subunit),
            Participant::new(&m.ribosome_binding_factor),
            Participant::new(&m.initiation_factor_1),
            Participant::new(&m.initiation_factor_2),
            Participant::new(&m.gtp),
            Participant::new(&m.water),
        ],
        vec![
            Participant::new(&first),
            Participant::new(&m.ribosome_binding_factor),
            Participant::new(&m.initiation_factor_1),
            Participant::new(&m.initiation_factor_2),
            Participant::new(&m.phosphate),
            Participant::new(&m.gdp),
            Participant::new(&m.proton),
        ],
        RateLaw::new(
            &config.initiation_rate_constant,
            &[
                &m.gtp,
                &m.small_subunit_if3,
                &m.large_subunit,
                &m.ribosome_binding_factor,
                &m.initiation_factor_1,
                &m.initiation_factor_2,
                &m.water,
                &mrna,
            ],
        ),
    )
}

/// Emits the initiation of `protein`. A derived mRNA name belongs to this
/// protein alone and must not exist yet; an explicit transcript may be shared.
pub fn build_initiation(
    net: &mut NetworkBuilder,
    protein: &Protein,
) -> Result<(), TranslationError> {
    if protein.transcript.is_none() {
        net.claim(&protein.mrna_name(&net.config.monomer_suffix))?;
    }
    let reaction = initiation_reaction(net.config, protein);
    net.emit(reaction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiation_reaction() {
        let config = GeneratorConfig::default();
        let r = initiation_reaction(&config, &Protein::new("MG_001_MONOMER", "ZK"));
        assert_eq!(r.id.to_string(), "MG_001_MONOMER_Transl_Init");
        assert!(r.consumes("MG_001"));
        assert!(r.produces("MG_001_MONOMER_p0"));
        assert_eq!(
            r.rate_law.to_string(),
            "k2 * GTP * RIBOSOME_30S_IF3 * RIBOSOME_50S * MG_143_MONOMER * MG_173_MONOMER * MG_142_MONOMER * H2O * MG_001"
        );
        // factors are released again
        for factor in ["MG_143_MONOMER", "MG_173_MONOMER", "MG_142_MONOMER"] {
            assert_eq!(r.net_change(factor), 0);
        }
        assert_eq!(r.net_change("RIBOSOME_30S_IF3"), -1);
        assert_eq!(r.net_change("RIBOSOME_50S"), -1);
    }

    #[test]
    fn test_explicit_transcript() {
        let config = GeneratorConfig::default();
        let protein = Protein::new("P1", "ZA").with_transcript("tx_P1");
        let r = initiation_reaction(&config, &protein);
        assert!(r.consumes("tx_P1"));
        assert!(r.rate_law.factors.iter().any(|f| f == "tx_P1"));
    }

    #[test]
    fn test_subunit_assembly() {
        let config = GeneratorConfig::default();
        let r = subunit_assembly(&config);
        assert_eq!(r.id.to_string(), "_30S_assembl");
        assert_eq!(r.equation(), "MG_196_MONOMER + RIBOSOME_30S -> RIBOSOME_30S_IF3");
        assert_eq!(r.rate_law.to_string(), "k * MG_196_MONOMER * RIBOSOME_30S");
    }
}
