/// A protein to be translated: identifier, residue sequence in single-letter
/// codes and, optionally, the name of the transcript it is translated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protein {
    pub id: String,
    pub sequence: Vec<char>,
    pub transcript: Option<String>,
}

impl Protein {
    pub fn new(id: &str, sequence: &str) -> Self {
        Self {
            id: id.to_string(),
            sequence: sequence.chars().collect(),
            transcript: None,
        }
    }

    pub fn with_transcript(mut self, transcript: &str) -> Self {
        self.transcript = Some(transcript.to_string());
        self
    }

    /// replaces the first residue with the initiator code (formyl-methionine is
    /// charged on its own tRNA, so it is a distinct "amino acid" for the network)
    pub fn with_initiator(mut self, initiator: char) -> Self {
        if let Some(first) = self.sequence.first_mut() {
            *first = initiator;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Name of the mRNA species consumed by initiation.
    ///
    /// An explicit transcript wins; otherwise a protein named `MG_001_MONOMER`
    /// is translated from `MG_001` (the monomer suffix is stripped), and any
    /// other protein from `<id>_mRNA`.
    pub fn mrna_name(&self, monomer_suffix: &str) -> String {
        if let Some(transcript) = &self.transcript {
            return transcript.clone();
        }
        match self.id.strip_suffix(monomer_suffix) {
            Some(stem) if !monomer_suffix.is_empty() && !stem.is_empty() => stem.to_string(),
            _ => format!("{}_mRNA", self.id),
        }
    }
}
