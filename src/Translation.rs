//! # Translation
//!
//! Compiler from protein sequences to a chemical-reaction network of bacterial
//! translation: tRNA charging, initiation, codon-by-codon elongation with
//! isoacceptor fan-out, termination and ribosome recycling.
//!
//! ## Network
//!
//! For a protein `P` of length L the network holds L + 1 position species
//! (`P_p0` .. `P_p(L-1)`, `P_pF`). Residue i of `P` served by k tRNA carriers
//! gives k parallel elongation reactions `P_pi_plus_<aa>1` .. `P_pi_plus_<aa>k`.
//! One initiation reaction produces `P_p0`, one termination reaction consumes
//! `P_pF`. Subunit assembly and ribosome recycling are protein independent and
//! appear once.
//!
//! ## Example
//! ```no_run
//! use RiboNet::Translation::carrier_map::CarrierMap;
//! use RiboNet::Translation::model_assembler::ModelAssembler;
//! use RiboNet::Translation::protein::Protein;
//! use RiboNet::library_manager::GeneratorConfig;
//! use std::path::Path;
//!
//! let assembler = ModelAssembler::new(GeneratorConfig::default(), CarrierMap::mycoplasma_genitalium());
//! let proteins = vec![Protein::new("MG_001_MONOMER", "MKVL").with_initiator('Z')];
//! match assembler.assemble_and_write(&proteins, Path::new("translation_model.json")) {
//!     Ok(model) => model.pretty_print(),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

/// fatal errors of a generation run
pub mod errors;
/// protein record read from the sequence table
pub mod protein;
/// amino acid code -> ordered tRNA carriers
pub mod carrier_map;
/// deduplicating, first-wins species store
pub mod species_registry;
/// typed reaction ids, reactions, the ordered reaction set and the stoichiometric matrix
pub mod reaction_set;
pub mod network_builder;
/// position species and isoacceptor fan-out of elongation
pub mod position_chain;
pub mod initiation;
pub mod termination;
/// tRNA charging and initiator formylation
pub mod aminoacylation;
/// orchestration of the builders, materialization and output
pub mod model_assembler;
mod model_assembler_tests;
