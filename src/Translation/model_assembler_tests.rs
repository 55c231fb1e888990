#[cfg(test)]
mod tests {
    use crate::Document::{
        Compartment, DocumentError, JsonModelDocument, ModelDocument, ModelUnits, Parameter,
    };
    use crate::Translation::carrier_map::{CarrierEntry, CarrierMap};
    use crate::Translation::errors::TranslationError;
    use crate::Translation::model_assembler::{ModelAssembler, TranslationModel, generate};
    use crate::Translation::protein::Protein;
    use crate::Translation::reaction_set::{Reaction, ReactionId, ReactionKind};
    use crate::Translation::species_registry::SpeciesParams;
    use crate::library_manager::GeneratorConfig;
    use indexmap::IndexMap;
    use std::collections::HashSet;
    use std::fs;

    fn ar_carriers() -> CarrierMap {
        let mut table = IndexMap::new();
        table.insert("A".to_string(), CarrierEntry::new("ALA", &["T_A"]));
        table.insert("R".to_string(), CarrierEntry::new("ARG", &["T_R1", "T_R2"]));
        CarrierMap::from_table(table).unwrap()
    }

    fn core_config() -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.include_aminoacylation = false;
        config
    }

    fn ar_model() -> TranslationModel {
        ModelAssembler::new(core_config(), ar_carriers())
            .build(&[Protein::new("P1", "AR")])
            .unwrap()
    }

    /// records the order of creation calls and checks references like a real library
    #[derive(Default)]
    struct RecordingDocument {
        calls: Vec<String>,
        species: HashSet<String>,
        fail_on_reaction: Option<String>,
    }

    impl ModelDocument for RecordingDocument {
        fn set_units(&mut self, _units: &ModelUnits) -> Result<(), DocumentError> {
            self.calls.push("units".to_string());
            Ok(())
        }
        fn create_compartment(&mut self, c: &Compartment) -> Result<(), DocumentError> {
            self.calls.push(format!("compartment:{}", c.id));
            Ok(())
        }
        fn create_parameter(&mut self, p: &Parameter) -> Result<(), DocumentError> {
            self.calls.push(format!("parameter:{}", p.id));
            Ok(())
        }
        fn create_species(&mut self, name: &str, _p: &SpeciesParams) -> Result<(), DocumentError> {
            if !self.species.insert(name.to_string()) {
                return Err(DocumentError::DuplicateSpecies(name.to_string()));
            }
            self.calls.push(format!("species:{}", name));
            Ok(())
        }
        fn create_reaction(&mut self, r: &Reaction) -> Result<(), DocumentError> {
            let id = r.id.to_string();
            if self.fail_on_reaction.as_deref() == Some(id.as_str()) {
                return Err(DocumentError::DuplicateReaction(id));
            }
            for s in r.species() {
                if !self.species.contains(s) {
                    return Err(DocumentError::UnknownSpecies {
                        owner: id,
                        species: s.to_string(),
                    });
                }
            }
            self.calls.push(format!("reaction:{}", id));
            Ok(())
        }
        fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
            Ok(self.calls.join("\n").into_bytes())
        }
    }

    #[test]
    fn test_ar_end_to_end() {
        let model = ar_model();
        for p in ["P1_p0", "P1_p1", "P1_pF"] {
            assert!(model.species.exists(p), "missing {}", p);
        }
        let positions = model
            .species
            .names()
            .filter(|n| n.starts_with("P1_p"))
            .count();
        assert_eq!(positions, 3);

        let at_p0: Vec<&Reaction> = model.reactions.with_source("P1_p0").collect();
        assert_eq!(at_p0.len(), 1);
        assert_eq!(at_p0[0].id.to_string(), "P1_p0_plus_A1");
        assert!(at_p0[0].produces("P1_p1"));
        assert!(at_p0[0].consumes("aminoacylated_T_A"));

        let at_p1: Vec<&Reaction> = model.reactions.with_source("P1_p1").collect();
        let ids: Vec<String> = at_p1.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["P1_p1_plus_R1", "P1_p1_plus_R2"]);
        assert!(at_p1.iter().all(|r| r.produces("P1_pF")));
        assert!(at_p1[0].consumes("aminoacylated_T_R1"));
        assert!(at_p1[1].consumes("aminoacylated_T_R2"));

        let init: Vec<&Reaction> = model.reactions.by_kind(ReactionKind::Initiation).collect();
        assert_eq!(init.len(), 1);
        assert_eq!(init[0].id.to_string(), "P1_Transl_Init");
        assert!(init[0].produces("P1_p0"));

        let term: Vec<&Reaction> = model.reactions.by_kind(ReactionKind::Termination).collect();
        assert_eq!(term.len(), 1);
        assert!(term[0].consumes("P1_pF"));
        assert!(term[0].produces("P1"));

        assert_eq!(model.reactions.count_kind(ReactionKind::Elongation), 3);
        assert_eq!(model.reactions.count_kind(ReactionKind::Aminoacylation), 0);
        // 3 elongation + init + termination + assembly + recycling
        assert_eq!(model.reactions.len(), 7);
    }

    #[test]
    fn test_global_reactions_appear_once() {
        let proteins = vec![
            Protein::new("P1", "AR"),
            Protein::new("P2", "RRA"),
            Protein::new("P3", "A"),
        ];
        let model = ModelAssembler::new(core_config(), ar_carriers())
            .build(&proteins)
            .unwrap();
        assert_eq!(model.reactions.count_kind(ReactionKind::SubunitAssembly), 1);
        assert_eq!(model.reactions.count_kind(ReactionKind::Recycling), 1);
        assert_eq!(model.reactions.count_kind(ReactionKind::Initiation), 3);
        assert_eq!(model.reactions.count_kind(ReactionKind::Termination), 3);
        // AR: 1 + 2, RRA: 2 + 2 + 1, A: 1
        assert_eq!(model.reactions.count_kind(ReactionKind::Elongation), 9);
        assert!(model.reactions.contains(&ReactionId::SubunitAssembly));
        // assembly precedes every initiation
        let ids: Vec<String> = model.reactions.iter().map(|r| r.id.to_string()).collect();
        let assembly = ids.iter().position(|id| id == "_30S_assembl").unwrap();
        let first_init = ids.iter().position(|id| id.ends_with("_Transl_Init")).unwrap();
        assert!(assembly < first_init);
        assert_eq!(ids.last().map(|s| s.as_str()), Some("release"));
    }

    #[test]
    fn test_every_position_count_is_length_plus_one() {
        let proteins = vec![Protein::new("P1", "ARRA"), Protein::new("P2", "RRRRRR")];
        let model = ModelAssembler::new(core_config(), ar_carriers())
            .build(&proteins)
            .unwrap();
        for protein in &proteins {
            let prefix = format!("{}_p", protein.id);
            let count = model.species.names().filter(|n| n.starts_with(&prefix)).count();
            assert_eq!(count, protein.len() + 1);
        }
    }

    #[test]
    fn test_no_dangling_species_in_document_order() {
        let model = ar_model();
        let mut doc = RecordingDocument::default();
        model.materialize(&mut doc).unwrap();
        let first_reaction = doc
            .calls
            .iter()
            .position(|c| c.starts_with("reaction:"))
            .unwrap();
        let last_species = doc
            .calls
            .iter()
            .rposition(|c| c.starts_with("species:"))
            .unwrap();
        assert!(last_species < first_reaction);
        assert_eq!(doc.calls[0], "units");
        assert_eq!(doc.calls[1], "compartment:c");
        assert_eq!(doc.calls[2], "parameter:k");
        assert_eq!(doc.calls[3], "parameter:k2");
        for reaction in model.reactions.iter() {
            for s in reaction.species() {
                assert!(model.species.exists(s), "{} not registered", s);
            }
        }
    }

    #[test]
    fn test_machinery_amounts_win() {
        let mut config = core_config();
        config.initial_amounts.insert("GTP".to_string(), 1000.0);
        config.initial_amounts.insert("RIBOSOME_50S".to_string(), 250.0);
        let model = ModelAssembler::new(config, ar_carriers())
            .build(&[Protein::new("P1", "AR")])
            .unwrap();
        assert_eq!(model.species.get("GTP").unwrap().initial_amount, 1000.0);
        assert_eq!(model.species.get("RIBOSOME_50S").unwrap().initial_amount, 250.0);
        assert_eq!(model.species.get("P1_p0").unwrap().initial_amount, 0.0);
        // machinery registered first
        assert_eq!(model.species.index_of("RIBOSOME_30S_IF3"), Some(0));
    }

    #[test]
    fn test_catalytic_factors_net_zero() {
        let model = ModelAssembler::new(GeneratorConfig::default(), CarrierMap::mycoplasma_genitalium())
            .build(&[Protein::new("MG_001_MONOMER", "MKLSRWAT").with_initiator('Z')])
            .unwrap();
        for r in model.reactions.by_kind(ReactionKind::Elongation) {
            assert_eq!(r.net_change("MG_089_MONOMER"), 0, "{}", r.id);
            assert_eq!(r.net_change("MG_451_MONOMER"), 0, "{}", r.id);
        }
        for r in model.reactions.by_kind(ReactionKind::Initiation) {
            for f in ["MG_143_MONOMER", "MG_173_MONOMER", "MG_142_MONOMER"] {
                assert_eq!(r.net_change(f), 0);
            }
        }
    }

    #[test]
    fn test_translation_cycle_is_balanced() {
        let model = ar_model();
        // one path: assembly, init, p0 via A1, p1 via R1, termination, recycling
        let path = [
            "_30S_assembl",
            "P1_Transl_Init",
            "P1_p0_plus_A1",
            "P1_p1_plus_R1",
            "P1_termination",
            "release",
        ];
        let reactions: Vec<&Reaction> = model
            .reactions
            .iter()
            .filter(|r| path.contains(&r.id.to_string().as_str()))
            .collect();
        assert_eq!(reactions.len(), path.len());
        let net = |species: &str| -> i64 { reactions.iter().map(|r| r.net_change(species)).sum() };
        for s in [
            "P1_p0",
            "P1_p1",
            "P1_pF",
            "RIBOSOME_30S",
            "RIBOSOME_30S_IF3",
            "RIBOSOME_50S",
            "MG_258_MONOMER",
            "RF1_30S_50S",
        ] {
            assert_eq!(net(s), 0, "{} not balanced", s);
        }
        assert_eq!(net("P1"), 1);
        assert_eq!(net("P1_mRNA"), -1);
    }

    #[test]
    fn test_stoichiometric_matrix_shape() {
        let model = ar_model();
        let matrix = model.stoichiometric_matrix();
        assert_eq!(matrix.len(), model.reactions.len());
        assert!(matrix.iter().all(|row| row.len() == model.species.len()));
        let release_row = matrix.last().unwrap();
        let complex = model.species.index_of("RF1_30S_50S").unwrap();
        assert_eq!(release_row[complex], -1);
    }

    #[test]
    fn test_unknown_amino_acid_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let assembler = ModelAssembler::new(core_config(), ar_carriers());
        let err = assembler
            .assemble_and_write(&[Protein::new("P1", "AR"), Protein::new("P2", "AWR")], &path)
            .unwrap_err();
        match err {
            TranslationError::UnknownAminoAcid {
                protein,
                position,
                code,
            } => {
                assert_eq!(protein, "P2");
                assert_eq!(position, 1);
                assert_eq!(code, 'W');
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_run_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "previous").unwrap();
        let assembler = ModelAssembler::new(core_config(), ar_carriers());
        let mut doc = RecordingDocument {
            fail_on_reaction: Some("P1_termination".to_string()),
            ..Default::default()
        };
        let err = assembler
            .assemble_into(&[Protein::new("P1", "AR")], &mut doc, &path)
            .unwrap_err();
        assert!(matches!(
            err,
            TranslationError::UnderlyingLibraryFailure(DocumentError::DuplicateReaction(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_duplicate_protein_is_rejected() {
        let err = ModelAssembler::new(core_config(), ar_carriers())
            .build(&[Protein::new("P1", "AR"), Protein::new("P1", "RA")])
            .unwrap_err();
        assert!(matches!(err, TranslationError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn test_reaction_id_clashing_with_species() {
        // the finished protein species "release" would shadow the recycling reaction
        let err = ModelAssembler::new(core_config(), ar_carriers())
            .build(&[Protein::new("release", "AR")])
            .unwrap_err();
        assert!(matches!(err, TranslationError::DuplicateIdentifier { ref id } if id == "release"));
    }

    fn collision(proteins: &[Protein]) -> String {
        match ModelAssembler::new(core_config(), ar_carriers()).build(proteins) {
            Err(TranslationError::DuplicateIdentifier { id }) => id,
            other => panic!("expected a duplicate identifier, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_species_role_collisions() {
        // finished protein X_p1 is the second position of X
        assert_eq!(
            collision(&[Protein::new("X", "AR"), Protein::new("X_p1", "A")]),
            "X_p1"
        );
        // finished protein named like a machinery species
        assert_eq!(collision(&[Protein::new("GTP", "A")]), "GTP");
        // finished protein named like a tRNA carrier
        assert_eq!(
            collision(&[Protein::new("P1", "AR"), Protein::new("T_R1", "A")]),
            "T_R1"
        );
        // finished protein named like the derived mRNA of another protein
        assert_eq!(
            collision(&[Protein::new("MG_001", "A"), Protein::new("MG_001_MONOMER", "A")]),
            "MG_001"
        );
    }

    #[test]
    fn test_shared_explicit_transcript() {
        let model = ModelAssembler::new(core_config(), ar_carriers())
            .build(&[
                Protein::new("P1", "AR").with_transcript("shared_tx"),
                Protein::new("P2", "RA").with_transcript("shared_tx"),
            ])
            .unwrap();
        assert_eq!(
            model.species.names().filter(|n| *n == "shared_tx").count(),
            1
        );
        for protein in ["P1", "P2"] {
            let init = model
                .reactions
                .iter()
                .find(|r| r.id.to_string() == format!("{}_Transl_Init", protein))
                .unwrap();
            assert!(init.consumes("shared_tx"));
        }
    }

    #[test]
    fn test_aminoacylation_block_feeds_elongation() {
        let model = ModelAssembler::new(GeneratorConfig::default(), CarrierMap::mycoplasma_genitalium())
            .build(&[Protein::new("MG_001_MONOMER", "MKR").with_initiator('Z')])
            .unwrap();
        assert_eq!(model.reactions.count_kind(ReactionKind::Aminoacylation), 36);
        assert_eq!(model.reactions.count_kind(ReactionKind::Formylation), 1);
        // every loaded carrier consumed by elongation is produced by charging
        for r in model.reactions.by_kind(ReactionKind::Elongation) {
            let loaded = r
                .reactants
                .iter()
                .find(|p| p.species.starts_with("aminoacylated_"))
                .unwrap();
            assert!(
                model
                    .reactions
                    .iter()
                    .any(|c| c.kind() != ReactionKind::Elongation && c.produces(&loaded.species)),
                "{} is never charged",
                loaded.species
            );
        }
        // Z, K, R: 1 + 2 + 4
        assert_eq!(model.reactions.count_kind(ReactionKind::Elongation), 7);
        assert!(model.reactions.contains_rendered("MG_001_MONOMER_p0_plus_Z1"));
        assert!(model.species.exists("MG_001"));
    }

    #[test]
    fn test_written_json_matches_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = ModelAssembler::new(core_config(), ar_carriers())
            .assemble_and_write(&[Protein::new("P1", "AR")], &path)
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value["species"].as_object().unwrap().len(),
            model.species.len()
        );
        assert_eq!(
            value["reactions"].as_object().unwrap().len(),
            model.reactions.len()
        );
        assert_eq!(value["parameters"]["k2"]["value"], 1.0);
        assert_eq!(value["compartments"]["c"]["units"], "litre");
        assert_eq!(value["units"]["time"], "second");
        let mut doc = JsonModelDocument::new("again");
        model.materialize(&mut doc).unwrap();
        assert_eq!(doc.reaction_count(), 7);
    }

    #[test]
    fn test_summary_table() {
        let model = ar_model();
        let text = model.summary_table().to_string();
        assert!(text.contains("elongation reactions"));
        assert!(text.contains("reactions total"));
        assert!(!text.contains("aminoacylation reactions"));
        let reactions = model.reactions_table().to_string();
        assert!(reactions.contains("P1_p1_plus_R2"));
    }

    #[test]
    fn test_generate_from_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let proteins = dir.path().join("ProtSeq.csv");
        fs::write(&proteins, "name,length,sequence\nP1,3,MAR\nP2,2,MR\n").unwrap();
        let transcripts = dir.path().join("rnas.csv");
        fs::write(&transcripts, "name\nP1_mRNA\n").unwrap();
        let carriers = dir.path().join("carriers.json");
        fs::write(
            &carriers,
            r#"{"A": {"substrate": "ALA", "carriers": ["T_A"]},
                "R": {"substrate": "ARG", "carriers": ["T_R1", "T_R2"]},
                "Z": {"substrate": "MET", "carriers": ["T_fM"]}}"#,
        )
        .unwrap();
        let output = dir.path().join("out.json");
        let config = GeneratorConfig {
            protein_table: proteins.to_str().unwrap().to_string(),
            transcript_table: Some(transcripts.to_str().unwrap().to_string()),
            carrier_table: Some(carriers.to_str().unwrap().to_string()),
            output: output.to_str().unwrap().to_string(),
            ..GeneratorConfig::default()
        };
        let model = generate(&config).unwrap();
        assert!(output.exists());
        // P2_mRNA is missing from the transcript table: warned, still built
        assert!(model.species.exists("P2_mRNA"));
        assert!(model.reactions.contains_rendered("P1_p0_plus_Z1"));
        assert!(model.reactions.contains_rendered("T_fM_Formylation"));
        // MAR: Z1, A1, R1, R2; MR: Z1, R1, R2
        assert_eq!(model.reactions.count_kind(ReactionKind::Elongation), 7);
    }

    #[test]
    fn test_generate_with_bad_carrier_table() {
        let dir = tempfile::tempdir().unwrap();
        let proteins = dir.path().join("ProtSeq.csv");
        fs::write(&proteins, "name,length,sequence\nP1,2,MA\n").unwrap();
        let carriers = dir.path().join("carriers.json");
        fs::write(&carriers, r#"{"A": {"substrate": "ALA", "carriers": []}}"#).unwrap();
        let output = dir.path().join("out.json");
        let config = GeneratorConfig {
            protein_table: proteins.to_str().unwrap().to_string(),
            carrier_table: Some(carriers.to_str().unwrap().to_string()),
            output: output.to_str().unwrap().to_string(),
            ..GeneratorConfig::default()
        };
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, TranslationError::InvalidCarrierTable(_)));
        assert!(!output.exists());
    }
}
