//! # Generator configuration
//!
//! ## Purpose
//! Keeps every tunable of a generation run in one serializable place: where the
//! input tables live, where the model is written, and the names of the fixed
//! translation machinery (energy carriers, elongation/initiation/release factors,
//! ribosomal subunits). Defaults reproduce the Mycoplasma genitalium model.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "protein_table": "ProtSeq.csv",
//!   "transcript_table": "Molecules_names_RNAs_Translation.csv",
//!   "carrier_table": null,
//!   "output": "translation_model.json",
//!   "initiator_code": "Z",
//!   "include_aminoacylation": true,
//!   "machinery": { "gtp": "GTP", "elongation_factor_g": "MG_089_MONOMER", "...": "..." },
//!   "initial_amounts": { "GTP": 1000000.0 }
//! }
//! ```
//! Missing keys fall back to their defaults, so a config file only needs the
//! fields it changes.
//!
//! ## Usage
//! ```rust, ignore
//! use RiboNet::library_manager::ConfigManager;
//!
//! let mut manager = ConfigManager::with_config_file("ribonet_config.json");
//! manager.set_protein_table("ProtSeq.csv")?;
//! let config = manager.get_config().clone();
//! ```
use crate::Translation::species_registry::SpeciesParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// default name of the configuration file
pub const CONFIG_FILE: &str = "ribonet_config.json";

/// Names of the protein-independent species of the translation machinery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachinerySpecies {
    pub gtp: String,
    pub gdp: String,
    pub phosphate: String,
    pub water: String,
    pub proton: String,
    pub atp: String,
    pub amp: String,
    pub pyrophosphate: String,
    /// formyl donor (10-formyl-tetrahydrofolate) and its spent form
    pub formyl_donor: String,
    pub formyl_donor_spent: String,
    pub elongation_factor_g: String,
    pub elongation_factor_tu: String,
    pub ribosome_binding_factor: String,
    pub initiation_factor_1: String,
    pub initiation_factor_2: String,
    pub initiation_factor_3: String,
    pub release_factor: String,
    pub small_subunit: String,
    pub large_subunit: String,
    /// small subunit loaded with IF3, the form consumed by initiation
    pub small_subunit_if3: String,
    /// post-termination complex of release factor and both subunits
    pub release_complex: String,
}

impl Default for MachinerySpecies {
    fn default() -> Self {
        Self {
            gtp: "GTP".to_string(),
            gdp: "GDP".to_string(),
            phosphate: "PI".to_string(),
            water: "H2O".to_string(),
            proton: "H".to_string(),
            atp: "ATP".to_string(),
            amp: "AMP".to_string(),
            pyrophosphate: "PPI".to_string(),
            formyl_donor: "FTHF10".to_string(),
            formyl_donor_spent: "THF".to_string(),
            elongation_factor_g: "MG_089_MONOMER".to_string(),
            elongation_factor_tu: "MG_451_MONOMER".to_string(),
            ribosome_binding_factor: "MG_143_MONOMER".to_string(),
            initiation_factor_1: "MG_173_MONOMER".to_string(),
            initiation_factor_2: "MG_142_MONOMER".to_string(),
            initiation_factor_3: "MG_196_MONOMER".to_string(),
            release_factor: "MG_258_MONOMER".to_string(),
            small_subunit: "RIBOSOME_30S".to_string(),
            large_subunit: "RIBOSOME_50S".to_string(),
            small_subunit_if3: "RIBOSOME_30S_IF3".to_string(),
            release_complex: "RF1_30S_50S".to_string(),
        }
    }
}

impl MachinerySpecies {
    /// every machinery species, in the order the assembler registers them
    pub fn all(&self) -> Vec<&str> {
        vec![
            self.small_subunit_if3.as_str(),
            self.large_subunit.as_str(),
            self.ribosome_binding_factor.as_str(),
            self.small_subunit.as_str(),
            self.initiation_factor_1.as_str(),
            self.initiation_factor_2.as_str(),
            self.initiation_factor_3.as_str(),
            self.gtp.as_str(),
            self.gdp.as_str(),
            self.phosphate.as_str(),
            self.water.as_str(),
            self.proton.as_str(),
            self.elongation_factor_g.as_str(),
            self.elongation_factor_tu.as_str(),
            self.release_factor.as_str(),
            self.release_complex.as_str(),
        ]
    }

    /// species only needed by the aminoacylation block
    pub fn charging(&self) -> Vec<&str> {
        vec![
            self.atp.as_str(),
            self.amp.as_str(),
            self.pyrophosphate.as_str(),
            self.formyl_donor.as_str(),
            self.formyl_donor_spent.as_str(),
        ]
    }
}

/// Full configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub protein_table: String,
    pub transcript_table: Option<String>,
    /// JSON carrier table; `None` selects the built-in M. genitalium table
    pub carrier_table: Option<String>,
    pub output: String,
    pub model_id: String,
    pub compartment: String,
    pub compartment_size: f64,
    pub compartment_units: String,
    pub substance_units: String,
    pub time_units: String,
    /// rate constant of elongation, termination and the global reactions
    pub rate_constant: String,
    /// rate constant of initiation
    pub initiation_rate_constant: String,
    pub rate_constant_value: f64,
    pub initiation_rate_constant_value: f64,
    pub rate_units: String,
    /// code that replaces the first residue of every loaded sequence
    pub initiator_code: char,
    /// suffix stripped from a protein id to name its mRNA
    pub monomer_suffix: String,
    pub include_aminoacylation: bool,
    pub machinery: MachinerySpecies,
    /// initial amounts of selected species; everything else starts at 0
    pub initial_amounts: HashMap<String, f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            protein_table: "ProtSeq.csv".to_string(),
            transcript_table: None,
            carrier_table: None,
            output: "translation_model.json".to_string(),
            model_id: "translation".to_string(),
            compartment: "c".to_string(),
            compartment_size: 1.0,
            compartment_units: "litre".to_string(),
            substance_units: "item".to_string(),
            time_units: "second".to_string(),
            rate_constant: "k".to_string(),
            initiation_rate_constant: "k2".to_string(),
            rate_constant_value: 1.0,
            initiation_rate_constant_value: 1.0,
            rate_units: "per_second".to_string(),
            initiator_code: 'Z',
            monomer_suffix: "_MONOMER".to_string(),
            include_aminoacylation: true,
            machinery: MachinerySpecies::default(),
            initial_amounts: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// creation parameters for `name`: configured initial amount or zero
    pub fn species_params(&self, name: &str) -> SpeciesParams {
        let amount = self.initial_amounts.get(name).copied().unwrap_or(0.0);
        SpeciesParams::new(&self.compartment, amount, &self.substance_units)
    }
}

/// Loads, updates and persists a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: GeneratorConfig,
    config_file: String,
}

impl ConfigManager {
    /// Loads `ribonet_config.json` from the working directory, or the defaults
    /// if it is missing or unreadable.
    pub fn new() -> Self {
        Self::with_config_file(CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let config = Self::load_config(config_file).unwrap_or_default();
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    /// Strict variant of [`ConfigManager::with_config_file`]: a file that exists
    /// but does not parse is an error instead of a silent fallback.
    pub fn from_existing_file(config_file: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(config_file).exists() {
            return Err(format!("Config file does not exist: {}", config_file).into());
        }
        let config = Self::load_config(config_file)?;
        Ok(Self {
            config,
            config_file: config_file.to_string(),
        })
    }

    fn load_config(config_file: &str) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: GeneratorConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(GeneratorConfig::default())
        }
    }

    /// Writes the current configuration to the config file. Does nothing in tests.
    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        #[cfg(test)]
        {
            return Ok(());
        }

        #[cfg(not(test))]
        {
            let content = serde_json::to_string_pretty(&self.config)?;
            fs::write(&self.config_file, content)?;
            Ok(())
        }
    }

    /// Writes the default configuration to `path` as a starting template.
    pub fn write_template(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(&GeneratorConfig::default())?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn set_protein_table(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.protein_table = path.to_string();
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    pub fn set_transcript_table(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.transcript_table = Some(path.to_string());
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    pub fn set_carrier_table(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.carrier_table = Some(path.to_string());
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    /// the output file need not exist yet, only its directory
    pub fn set_output(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let parent = Path::new(path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if parent.is_dir() {
            self.config.output = path.to_string();
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("Directory does not exist: {}", parent.display()).into())
        }
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config = GeneratorConfig::default();
        self.save_config()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
