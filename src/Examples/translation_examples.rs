use crate::Translation::carrier_map::{CarrierEntry, CarrierMap};
use crate::Translation::errors::TranslationError;
use crate::Translation::model_assembler::{ModelAssembler, TranslationModel};
use crate::Translation::protein::Protein;
use crate::library_manager::GeneratorConfig;
use indexmap::IndexMap;

/// Builds one of the demonstration networks in memory and prints it.
/// 0 - protein "AR" with one alanine and two arginine tRNAs
/// 1 - three short M. genitalium proteins with the full tRNA table and charging block
pub fn translation_examples(task: usize) -> Result<TranslationModel, TranslationError> {
    let model = match task {
        0 => {
            let mut table = IndexMap::new();
            table.insert("A".to_string(), CarrierEntry::new("ALA", &["T_A"]));
            table.insert("R".to_string(), CarrierEntry::new("ARG", &["T_R1", "T_R2"]));
            let carriers = CarrierMap::from_table(table)?;
            let config = GeneratorConfig {
                include_aminoacylation: false,
                ..GeneratorConfig::default()
            };
            let assembler = ModelAssembler::new(config, carriers);
            assembler.build(&[Protein::new("P1", "AR")])?
        }
        1 => {
            let mut config = GeneratorConfig::default();
            config.initial_amounts.insert("GTP".to_string(), 1000.0);
            config.initial_amounts.insert("ATP".to_string(), 1000.0);
            config.initial_amounts.insert("RIBOSOME_30S".to_string(), 100.0);
            config.initial_amounts.insert("RIBOSOME_50S".to_string(), 100.0);
            let proteins: Vec<Protein> = [
                ("MG_001_MONOMER", "MKVLIQ"),
                ("MG_003_MONOMER", "MSEKW"),
                ("MG_004_MONOMER", "MTGHRPNDY"),
            ]
            .iter()
            .map(|(id, seq)| Protein::new(id, seq).with_initiator(config.initiator_code))
            .collect();
            let assembler = ModelAssembler::new(config, CarrierMap::mycoplasma_genitalium());
            assembler.build(&proteins)?
        }
        _ => {
            return Err(TranslationError::Config(format!(
                "no demo number {}, choose 0 or 1",
                task
            )));
        }
    };
    model.pretty_print();
    model.reactions_table().printstd();
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translation::reaction_set::ReactionKind;

    #[test]
    fn test_demo_networks() {
        let ar = translation_examples(0).unwrap();
        assert_eq!(ar.reactions.count_kind(ReactionKind::Elongation), 3);
        let three = translation_examples(1).unwrap();
        assert_eq!(three.reactions.count_kind(ReactionKind::Initiation), 3);
        assert_eq!(three.species.get("GTP").unwrap().initial_amount, 1000.0);
        assert!(translation_examples(7).is_err());
    }
}
