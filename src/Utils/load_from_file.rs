//! Readers for the input tables of a generation run:
//! - protein table, CSV with a header row and columns `name,length,sequence`;
//! - transcript table, CSV with a header row, mRNA names in the first column;
//! - carrier table, JSON (see [`crate::Translation::carrier_map`]).
use crate::Translation::carrier_map::CarrierEntry;
use crate::Translation::protein::Protein;
use indexmap::IndexMap;
use log::{info, warn};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{path}' line {line}: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },
    #[error("protein '{protein}' declares length {declared} but its sequence has {actual} residues")]
    LengthMismatch {
        protein: String,
        declared: usize,
        actual: usize,
    },
    #[error("'{path}' is not a valid carrier table: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// data lines of a CSV file: header dropped, blank lines skipped, 1-based line numbers kept
fn csv_rows(file_name: &str) -> Result<Vec<(usize, Vec<String>)>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: file_name.to_string(),
        source,
    };
    let file = File::open(Path::new(file_name)).map_err(io_error)?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error)?;
        if i == 0 || line.trim().is_empty() {
            continue;
        }
        let fields = line
            .split(',')
            .map(|f| f.trim().trim_matches('"').trim().to_string())
            .collect();
        rows.push((i + 1, fields));
    }
    Ok(rows)
}

/// Reads the protein table. The first residue of every sequence is replaced
/// by `initiator`, the code of the formylated initiator tRNA.
pub fn load_proteins(file_name: &str, initiator: char) -> Result<Vec<Protein>, LoadError> {
    let residues = Regex::new(r"^[A-Z]+$").map_err(|e| LoadError::Malformed {
        path: file_name.to_string(),
        line: 0,
        reason: e.to_string(),
    })?;
    let mut proteins = Vec::new();
    for (line, fields) in csv_rows(file_name)? {
        let malformed = |reason: String| LoadError::Malformed {
            path: file_name.to_string(),
            line,
            reason,
        };
        if fields.len() < 3 {
            return Err(malformed(format!(
                "expected name,length,sequence but found {} column(s)",
                fields.len()
            )));
        }
        let name = &fields[0];
        if name.is_empty() {
            return Err(malformed("empty protein name".to_string()));
        }
        let declared: usize = fields[1]
            .parse()
            .map_err(|_| malformed(format!("length '{}' is not a number", fields[1])))?;
        let sequence = fields[2].to_ascii_uppercase();
        if !residues.is_match(&sequence) {
            return Err(malformed(format!(
                "sequence of '{}' is empty or has non-letter characters",
                name
            )));
        }
        let actual = sequence.chars().count();
        if declared != actual {
            return Err(LoadError::LengthMismatch {
                protein: name.clone(),
                declared,
                actual,
            });
        }
        proteins.push(Protein::new(name, &sequence).with_initiator(initiator));
    }
    if proteins.is_empty() {
        warn!("no proteins found in '{}'", file_name);
    }
    info!("loaded {} proteins from '{}'", proteins.len(), file_name);
    Ok(proteins)
}

/// Reads the transcript table (first column of every data row).
pub fn load_transcripts(file_name: &str) -> Result<Vec<String>, LoadError> {
    let names: Vec<String> = csv_rows(file_name)?
        .into_iter()
        .filter_map(|(_, fields)| fields.into_iter().next())
        .filter(|name| !name.is_empty())
        .collect();
    info!("loaded {} transcripts from '{}'", names.len(), file_name);
    Ok(names)
}

/// Reads a JSON carrier table; validation is left to `CarrierMap::from_table`.
pub fn load_carrier_table(file_name: &str) -> Result<IndexMap<String, CarrierEntry>, LoadError> {
    let text = std::fs::read_to_string(file_name).map_err(|source| LoadError::Io {
        path: file_name.to_string(),
        source,
    })?;
    let table: IndexMap<String, CarrierEntry> =
        serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: file_name.to_string(),
            source,
        })?;
    info!("loaded carrier table with {} codes from '{}'", table.len(), file_name);
    Ok(table)
}
