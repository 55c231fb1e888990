//! # Carrier map
//!
//! Static lookup from a single-letter amino-acid code to the ordered list of
//! tRNA species able to deliver it (isoacceptors). The order of the list is the
//! rank order used in elongation reaction ids (`..._plus_R1`, `..._plus_R2`),
//! so it is preserved exactly as given by the table.
//!
//! The table on disk is JSON:
//! ```json
//! { "A": { "substrate": "ALA", "carriers": ["MG471"] },
//!   "R": { "substrate": "ARG", "carriers": ["MG492", "MG495"] } }
//! ```
use crate::Translation::errors::TranslationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// prefix of a charged tRNA species
pub const LOADED_PREFIX: &str = "aminoacylated_";

/// one row of the carrier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierEntry {
    /// free amino acid species the carriers are charged with (e.g. "ALA")
    pub substrate: String,
    pub carriers: Vec<String>,
}

impl CarrierEntry {
    pub fn new(substrate: &str, carriers: &[&str]) -> Self {
        Self {
            substrate: substrate.to_string(),
            carriers: carriers.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarrierMap {
    entries: IndexMap<char, CarrierEntry>,
}

impl CarrierMap {
    /// Validates a raw table keyed by strings (as it comes out of JSON).
    /// Keys must be single characters, every carrier list must be non-empty and
    /// must not name the same carrier twice.
    pub fn from_table(table: IndexMap<String, CarrierEntry>) -> Result<Self, TranslationError> {
        let mut entries = IndexMap::new();
        for (key, entry) in table {
            let mut chars = key.trim().chars();
            let code = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(TranslationError::InvalidCarrierTable(format!(
                        "key '{}' is not a single-letter amino acid code",
                        key
                    )));
                }
            };
            if entry.carriers.is_empty() {
                return Err(TranslationError::InvalidCarrierTable(format!(
                    "amino acid '{}' has an empty carrier list",
                    code
                )));
            }
            let mut seen = HashSet::new();
            for carrier in &entry.carriers {
                if !seen.insert(carrier.as_str()) {
                    return Err(TranslationError::InvalidCarrierTable(format!(
                        "carrier '{}' is listed twice for amino acid '{}'",
                        carrier, code
                    )));
                }
            }
            if entries.insert(code, entry).is_some() {
                return Err(TranslationError::InvalidCarrierTable(format!(
                    "amino acid '{}' is defined twice",
                    code
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self, TranslationError> {
        let table: IndexMap<String, CarrierEntry> = serde_json::from_str(json)
            .map_err(|e| TranslationError::InvalidCarrierTable(e.to_string()))?;
        Self::from_table(table)
    }

    /// tRNA table of Mycoplasma genitalium; `Z` is the formyl-methionine initiator
    pub fn mycoplasma_genitalium() -> Self {
        let rows: [(char, &str, &[&str]); 21] = [
            ('A', "ALA", &["MG471"]),
            ('N', "ASN", &["MG514"]),
            ('D', "ASP", &["MG489"]),
            ('C', "CYS", &["MG483"]),
            ('E', "GLU", &["MG513"]),
            ('Q', "GLN", &["MG502"]),
            ('H', "HIS", &["MG518"]),
            ('M', "MET", &["MG485"]),
            ('F', "PHE", &["MG490"]),
            ('P', "PRO", &["MG484"]),
            ('Y', "TYR", &["MG503"]),
            ('V', "VAL", &["MG511"]),
            ('R', "ARG", &["MG492", "MG495", "MG497", "MG523"]),
            ('G', "GLY", &["MG493", "MG499"]),
            ('I', "ILE", &["MG472", "MG486"]),
            ('L', "LEU", &["MG500", "MG508", "MG519", "MG520"]),
            ('K', "LYS", &["MG501", "MG509"]),
            ('S', "SER", &["MG475", "MG487", "MG506", "MG507"]),
            ('T', "THR", &["MG479", "MG510", "MG512"]),
            ('W', "TRP", &["MG496", "MG504"]),
            ('Z', "MET", &["MG488"]),
        ];
        let entries = rows
            .iter()
            .map(|(code, substrate, carriers)| (*code, CarrierEntry::new(substrate, carriers)))
            .collect();
        Self { entries }
    }

    /// Ordered, non-empty list of carriers for `code`.
    /// The `UnknownAminoAcid` error carries no residue site; callers that know
    /// it attach it with [`TranslationError::at_residue`].
    pub fn carriers_for(&self, code: char) -> Result<&[String], TranslationError> {
        self.entries
            .get(&code)
            .map(|entry| entry.carriers.as_slice())
            .ok_or(TranslationError::UnknownAminoAcid {
                protein: String::new(),
                position: 0,
                code,
            })
    }

    pub fn entry(&self, code: char) -> Option<&CarrierEntry> {
        self.entries.get(&code)
    }

    /// codes and entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (char, &CarrierEntry)> {
        self.entries.iter().map(|(code, entry)| (*code, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loaded_carrier(carrier: &str) -> String {
        format!("{}{}", LOADED_PREFIX, carrier)
    }
}
