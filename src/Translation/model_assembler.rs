//! # Model assembler
//!
//! Runs the builders over all proteins in a fixed order, since later steps
//! reference species that earlier steps register:
//! 1. machinery species (configured initial amounts are set here and win)
//! 2. tRNA charging block (optional)
//! 3. sequence check and tRNA carriers of every protein
//! 4. position chains of every protein
//! 5. subunit assembly, once
//! 6. initiation of every protein
//! 7. termination of every protein
//! 8. ribosome recycling, once
//!
//! Machinery, carriers and explicit transcripts are shared and deduplicated.
//! Positions, finished proteins and derived mRNAs each belong to one protein;
//! such a name that is already taken fails with `DuplicateIdentifier`.
//! The result is an immutable [`TranslationModel`]. Materializing it into a
//! [`ModelDocument`] pushes the compartment, the parameters, every species and
//! then every reaction; a model is written to disk only after the document has
//! accepted all of them and serialized successfully.
use crate::Document::{
    Compartment, JsonModelDocument, ModelDocument, ModelUnits, Parameter, write_file,
};
use crate::Translation::aminoacylation::build_aminoacylation;
use crate::Translation::carrier_map::CarrierMap;
use crate::Translation::errors::TranslationError;
use crate::Translation::initiation::{build_initiation, subunit_assembly};
use crate::Translation::network_builder::NetworkBuilder;
use crate::Translation::position_chain::{
    build_position_chain, check_sequence, register_carriers,
};
use crate::Translation::protein::Protein;
use crate::Translation::reaction_set::{ReactionKind, ReactionSet};
use crate::Translation::species_registry::SpeciesRegistry;
use crate::Translation::termination::{build_termination, recycling_reaction};
use crate::Utils::load_from_file::{load_carrier_table, load_proteins, load_transcripts};
use crate::library_manager::GeneratorConfig;
use log::{debug, info, warn};
use prettytable::{Cell, Row, Table, row};
use std::collections::HashSet;
use std::path::Path;

/// Complete translation network of one run.
#[derive(Debug, Clone)]
pub struct TranslationModel {
    pub model_id: String,
    pub units: ModelUnits,
    pub compartment: Compartment,
    pub parameters: Vec<Parameter>,
    pub species: SpeciesRegistry,
    pub reactions: ReactionSet,
}

impl TranslationModel {
    /// Pushes the model into `document`: units, compartment, parameters,
    /// species in registration order, reactions in insertion order.
    pub fn materialize<D: ModelDocument + ?Sized>(
        &self,
        document: &mut D,
    ) -> Result<(), TranslationError> {
        document.set_units(&self.units)?;
        document.create_compartment(&self.compartment)?;
        for parameter in &self.parameters {
            document.create_parameter(parameter)?;
        }
        for (name, params) in self.species.iter() {
            document.create_species(name, params)?;
        }
        for reaction in self.reactions.iter() {
            document.create_reaction(reaction)?;
        }
        Ok(())
    }

    /// rows = reactions, columns = species
    pub fn stoichiometric_matrix(&self) -> Vec<Vec<i64>> {
        self.reactions.stoichiometric_matrix(&self.species)
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["model", &self.model_id]);
        table.add_row(row!["species", self.species.len()]);
        for kind in ReactionKind::ALL {
            let count = self.reactions.count_kind(kind);
            if count > 0 {
                table.add_row(row![format!("{} reactions", kind.as_str()), count]);
            }
        }
        table.add_row(row!["reactions total", self.reactions.len()]);
        table
    }

    /// one row per reaction: id, equation, rate law
    pub fn reactions_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(
            ["id", "equation", "rate"].iter().map(|h| Cell::new(h)).collect(),
        ));
        for reaction in self.reactions.iter() {
            table.add_row(Row::new(vec![
                Cell::new(&reaction.id.to_string()),
                Cell::new(&reaction.equation()),
                Cell::new(&reaction.rate_law.to_string()),
            ]));
        }
        table
    }

    pub fn pretty_print(&self) {
        self.summary_table().printstd();
    }
}

pub struct ModelAssembler {
    config: GeneratorConfig,
    carriers: CarrierMap,
    transcripts: Option<HashSet<String>>,
}

impl ModelAssembler {
    pub fn new(config: GeneratorConfig, carriers: CarrierMap) -> Self {
        Self {
            config,
            carriers,
            transcripts: None,
        }
    }

    /// Uses the carrier table named in the config, or the built-in one.
    pub fn from_config(config: GeneratorConfig) -> Result<Self, TranslationError> {
        let carriers = match &config.carrier_table {
            Some(path) => CarrierMap::from_table(load_carrier_table(path)?)?,
            None => CarrierMap::mycoplasma_genitalium(),
        };
        let mut assembler = Self::new(config, carriers);
        if let Some(path) = assembler.config.transcript_table.clone() {
            assembler = assembler.with_transcripts(load_transcripts(&path)?);
        }
        Ok(assembler)
    }

    /// Known transcript names. Proteins whose mRNA is not among them are
    /// still built, with a warning.
    pub fn with_transcripts(mut self, transcripts: Vec<String>) -> Self {
        self.transcripts = Some(transcripts.into_iter().collect());
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn carriers(&self) -> &CarrierMap {
        &self.carriers
    }

    pub fn build(&self, proteins: &[Protein]) -> Result<TranslationModel, TranslationError> {
        let config = &self.config;
        if proteins.is_empty() {
            warn!("no proteins given, the model holds the machinery only");
        }
        let mut net = NetworkBuilder::new(config, &self.carriers);

        for name in config.machinery.all() {
            net.register(name);
        }
        if config.include_aminoacylation {
            for name in config.machinery.charging() {
                net.register(name);
            }
            let charged = build_aminoacylation(&mut net)?;
            info!("charging block: {} reactions", charged);
        }

        for protein in proteins {
            check_sequence(protein, &self.carriers)?;
        }
        for protein in proteins {
            register_carriers(&mut net, protein)?;
        }
        for protein in proteins {
            let elongation = build_position_chain(&mut net, protein)?;
            info!(
                "{}: {} residues, {} elongation reactions",
                protein.id,
                protein.len(),
                elongation
            );
        }

        net.emit(subunit_assembly(config))?;

        for protein in proteins {
            if let Some(known) = &self.transcripts {
                let mrna = protein.mrna_name(&config.monomer_suffix);
                if !known.contains(&mrna) {
                    warn!("{}: mRNA '{}' is not in the transcript table", protein.id, mrna);
                }
            }
            build_initiation(&mut net, protein)?;
        }
        for protein in proteins {
            build_termination(&mut net, protein)?;
        }

        net.emit(recycling_reaction(config))?;

        let (species, reactions) = net.into_parts();
        // species and reactions share one id namespace in the document
        if let Some(clash) = reactions
            .iter()
            .map(|r| r.id.to_string())
            .find(|id| species.exists(id))
        {
            return Err(TranslationError::DuplicateIdentifier { id: clash });
        }
        info!(
            "network built: {} species, {} reactions",
            species.len(),
            reactions.len()
        );
        Ok(TranslationModel {
            model_id: config.model_id.clone(),
            units: ModelUnits {
                time: config.time_units.clone(),
                extent: config.substance_units.clone(),
                substance: config.substance_units.clone(),
            },
            compartment: Compartment {
                id: config.compartment.clone(),
                size: config.compartment_size,
                spatial_dimensions: 3,
                units: config.compartment_units.clone(),
                constant: true,
            },
            parameters: vec![
                Parameter {
                    id: config.rate_constant.clone(),
                    value: config.rate_constant_value,
                    units: config.rate_units.clone(),
                    constant: true,
                },
                Parameter {
                    id: config.initiation_rate_constant.clone(),
                    value: config.initiation_rate_constant_value,
                    units: config.rate_units.clone(),
                    constant: true,
                },
            ],
            species,
            reactions,
        })
    }

    /// Builds, materializes into `document`, serializes and writes atomically.
    /// On any error the file at `path` is left untouched.
    pub fn assemble_into<D: ModelDocument + ?Sized>(
        &self,
        proteins: &[Protein],
        document: &mut D,
        path: &Path,
    ) -> Result<TranslationModel, TranslationError> {
        let model = self.build(proteins)?;
        model.materialize(document)?;
        write_file(&*document, path)?;
        info!("model written to {}", path.display());
        Ok(model)
    }

    pub fn assemble_and_write(
        &self,
        proteins: &[Protein],
        path: &Path,
    ) -> Result<TranslationModel, TranslationError> {
        let mut document = JsonModelDocument::new(&self.config.model_id);
        self.assemble_into(proteins, &mut document, path)
    }
}

/// Full run driven by a config: load the tables, build, write to `config.output`.
pub fn generate(config: &GeneratorConfig) -> Result<TranslationModel, TranslationError> {
    info!("reading proteins from {}", config.protein_table);
    let proteins = load_proteins(&config.protein_table, config.initiator_code)?;
    debug!("{} proteins loaded", proteins.len());
    let assembler = ModelAssembler::from_config(config.clone())?;
    assembler.assemble_and_write(&proteins, Path::new(&config.output))
}
