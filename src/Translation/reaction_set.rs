//! # Reactions of the translation network
//!
//! A reaction is identified by a typed [`ReactionId`] built from structured
//! fields (protein, position, amino acid, isoacceptor rank). The string form is
//! produced only when rendering, so collisions can be checked on the structured
//! form first and then on the rendered form.
//!
//! [`ReactionSet`] keeps reactions in insertion order and refuses:
//! - a second reaction with the same id (structured or rendered);
//! - a reaction that references a species not yet in the [`SpeciesRegistry`].
use crate::Translation::errors::TranslationError;
use crate::Translation::species_registry::SpeciesRegistry;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReactionId {
    /// `<protein>_p<index>_plus_<amino_acid><rank>`
    Elongation {
        protein: String,
        index: usize,
        amino_acid: char,
        rank: usize,
    },
    /// `<protein>_Transl_Init`
    Initiation { protein: String },
    /// `<protein>_termination`
    Termination { protein: String },
    /// `_30S_assembl`
    SubunitAssembly,
    /// `release`
    Recycling,
    /// `<carrier>_Aminoacylation`
    Aminoacylation { carrier: String },
    /// `<carrier>_Formylation`
    Formylation { carrier: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReactionKind {
    Aminoacylation,
    Formylation,
    SubunitAssembly,
    Initiation,
    Elongation,
    Termination,
    Recycling,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 7] = [
        ReactionKind::Aminoacylation,
        ReactionKind::Formylation,
        ReactionKind::SubunitAssembly,
        ReactionKind::Initiation,
        ReactionKind::Elongation,
        ReactionKind::Termination,
        ReactionKind::Recycling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Aminoacylation => "aminoacylation",
            ReactionKind::Formylation => "formylation",
            ReactionKind::SubunitAssembly => "subunit assembly",
            ReactionKind::Initiation => "initiation",
            ReactionKind::Elongation => "elongation",
            ReactionKind::Termination => "termination",
            ReactionKind::Recycling => "recycling",
        }
    }
}

impl ReactionId {
    pub fn kind(&self) -> ReactionKind {
        match self {
            ReactionId::Elongation { .. } => ReactionKind::Elongation,
            ReactionId::Initiation { .. } => ReactionKind::Initiation,
            ReactionId::Termination { .. } => ReactionKind::Termination,
            ReactionId::SubunitAssembly => ReactionKind::SubunitAssembly,
            ReactionId::Recycling => ReactionKind::Recycling,
            ReactionId::Aminoacylation { .. } => ReactionKind::Aminoacylation,
            ReactionId::Formylation { .. } => ReactionKind::Formylation,
        }
    }
}

impl fmt::Display for ReactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionId::Elongation {
                protein,
                index,
                amino_acid,
                rank,
            } => write!(f, "{}_p{}_plus_{}{}", protein, index, amino_acid, rank),
            ReactionId::Initiation { protein } => write!(f, "{}_Transl_Init", protein),
            ReactionId::Termination { protein } => write!(f, "{}_termination", protein),
            ReactionId::SubunitAssembly => write!(f, "_30S_assembl"),
            ReactionId::Recycling => write!(f, "release"),
            ReactionId::Aminoacylation { carrier } => write!(f, "{}_Aminoacylation", carrier),
            ReactionId::Formylation { carrier } => write!(f, "{}_Formylation", carrier),
        }
    }
}

/// species reference with an integer stoichiometric coefficient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub species: String,
    pub stoichiometry: u32,
}

impl Participant {
    pub fn new(species: &str) -> Self {
        Self::with_stoichiometry(species, 1)
    }

    pub fn with_stoichiometry(species: &str, stoichiometry: u32) -> Self {
        Self {
            species: species.to_string(),
            stoichiometry,
        }
    }
}

/// mass-action rate law: a rate constant times a list of factors
/// (a factor repeated n times stands for concentration^n)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLaw {
    pub constant: String,
    pub factors: Vec<String>,
}

impl RateLaw {
    pub fn new(constant: &str, factors: &[&str]) -> Self {
        Self {
            constant: constant.to_string(),
            factors: factors.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl fmt::Display for RateLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constant)?;
        for factor in &self.factors {
            write!(f, " * {}", factor)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub id: ReactionId,
    pub reactants: Vec<Participant>,
    pub products: Vec<Participant>,
    pub rate_law: RateLaw,
    pub reversible: bool,
}

impl Reaction {
    pub fn new(
        id: ReactionId,
        reactants: Vec<Participant>,
        products: Vec<Participant>,
        rate_law: RateLaw,
    ) -> Self {
        Self {
            id,
            reactants,
            products,
            rate_law,
            reversible: false,
        }
    }

    pub fn kind(&self) -> ReactionKind {
        self.id.kind()
    }

    /// every species name the reaction references, reactants first, without repeats
    pub fn species(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.reactants
            .iter()
            .chain(self.products.iter())
            .map(|p| p.species.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// products minus reactants for one species
    pub fn net_change(&self, species: &str) -> i64 {
        let produced: i64 = self
            .products
            .iter()
            .filter(|p| p.species == species)
            .map(|p| p.stoichiometry as i64)
            .sum();
        let consumed: i64 = self
            .reactants
            .iter()
            .filter(|p| p.species == species)
            .map(|p| p.stoichiometry as i64)
            .sum();
        produced - consumed
    }

    pub fn consumes(&self, species: &str) -> bool {
        self.reactants.iter().any(|p| p.species == species)
    }

    pub fn produces(&self, species: &str) -> bool {
        self.products.iter().any(|p| p.species == species)
    }

    /// equation in the "A + 2 B -> C" form
    pub fn equation(&self) -> String {
        fn side(participants: &[Participant]) -> String {
            participants
                .iter()
                .map(|p| {
                    if p.stoichiometry == 1 {
                        p.species.clone()
                    } else {
                        format!("{} {}", p.stoichiometry, p.species)
                    }
                })
                .collect::<Vec<String>>()
                .join(" + ")
        }
        let arrow = if self.reversible { "<=>" } else { "->" };
        format!("{} {} {}", side(&self.reactants), arrow, side(&self.products))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReactionSet {
    reactions: IndexMap<ReactionId, Reaction>,
    rendered: HashSet<String>,
}

impl ReactionSet {
    pub fn new() -> Self {
        Self {
            reactions: IndexMap::new(),
            rendered: HashSet::new(),
        }
    }

    /// Adds a reaction. All of its species must already be registered.
    pub fn insert(
        &mut self,
        registry: &SpeciesRegistry,
        reaction: Reaction,
    ) -> Result<(), TranslationError> {
        let rendered = reaction.id.to_string();
        if self.reactions.contains_key(&reaction.id) || self.rendered.contains(&rendered) {
            return Err(TranslationError::DuplicateIdentifier { id: rendered });
        }
        if let Some(missing) = reaction
            .species()
            .into_iter()
            .find(|s| !registry.exists(s))
        {
            return Err(TranslationError::DanglingSpecies {
                reaction: rendered,
                species: missing.to_string(),
            });
        }
        self.rendered.insert(rendered);
        self.reactions.insert(reaction.id.clone(), reaction);
        Ok(())
    }

    pub fn get(&self, id: &ReactionId) -> Option<&Reaction> {
        self.reactions.get(id)
    }

    pub fn contains(&self, id: &ReactionId) -> bool {
        self.reactions.contains_key(id)
    }

    pub fn contains_rendered(&self, id: &str) -> bool {
        self.rendered.contains(id)
    }

    /// reactions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Reaction> {
        self.reactions.values()
    }

    pub fn by_kind(&self, kind: ReactionKind) -> impl Iterator<Item = &Reaction> {
        self.reactions.values().filter(move |r| r.kind() == kind)
    }

    pub fn count_kind(&self, kind: ReactionKind) -> usize {
        self.by_kind(kind).count()
    }

    /// elongation reactions consuming the given position species
    pub fn with_source<'a>(&'a self, position: &'a str) -> impl Iterator<Item = &'a Reaction> + 'a {
        self.by_kind(ReactionKind::Elongation)
            .filter(move |r| r.consumes(position))
    }

    /// Stoichiometric matrix: one row per reaction (insertion order), one column
    /// per species (registration order), entries are net changes.
    pub fn stoichiometric_matrix(&self, registry: &SpeciesRegistry) -> Vec<Vec<i64>> {
        self.reactions
            .values()
            .map(|reaction| {
                let mut row = vec![0i64; registry.len()];
                for p in &reaction.reactants {
                    if let Some(j) = registry.index_of(&p.species) {
                        row[j] -= p.stoichiometry as i64;
                    }
                }
                for p in &reaction.products {
                    if let Some(j) = registry.index_of(&p.species) {
                        row[j] += p.stoichiometry as i64;
                    }
                }
                row
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}
