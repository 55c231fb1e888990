//! Working state of one generation run: the species registry and the reaction
//! set, plus the configuration and carrier table the builders read from.
//!
//! [`NetworkBuilder::emit`] registers every participant of a reaction before the
//! reaction goes into the set, so a builder cannot reference a species that does
//! not exist yet.
use crate::Translation::carrier_map::CarrierMap;
use crate::Translation::errors::TranslationError;
use crate::Translation::reaction_set::{Reaction, ReactionSet};
use crate::Translation::species_registry::SpeciesRegistry;
use crate::library_manager::GeneratorConfig;

pub struct NetworkBuilder<'a> {
    pub config: &'a GeneratorConfig,
    pub carriers: &'a CarrierMap,
    species: SpeciesRegistry,
    reactions: ReactionSet,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(config: &'a GeneratorConfig, carriers: &'a CarrierMap) -> Self {
        Self {
            config,
            carriers,
            species: SpeciesRegistry::new(),
            reactions: ReactionSet::new(),
        }
    }

    /// registers `name` with the configured compartment, units and initial amount
    pub fn register(&mut self, name: &str) -> bool {
        let params = self.config.species_params(name);
        self.species.ensure(name, params)
    }

    /// Registers a species owned by exactly one protein role (a position, the
    /// finished protein, a derived mRNA). A name that already exists is a collision.
    pub fn claim(&mut self, name: &str) -> Result<(), TranslationError> {
        if self.register(name) {
            Ok(())
        } else {
            Err(TranslationError::DuplicateIdentifier {
                id: name.to_string(),
            })
        }
    }

    pub fn emit(&mut self, reaction: Reaction) -> Result<(), TranslationError> {
        for name in reaction.species() {
            self.register(name);
        }
        self.reactions.insert(&self.species, reaction)
    }

    pub fn species(&self) -> &SpeciesRegistry {
        &self.species
    }

    pub fn reactions(&self) -> &ReactionSet {
        &self.reactions
    }

    pub fn into_parts(self) -> (SpeciesRegistry, ReactionSet) {
        (self.species, self.reactions)
    }
}
