use crate::Document::model_document::{
    Compartment, DocumentError, ModelDocument, ModelUnits, Parameter,
};
use crate::Translation::reaction_set::{Participant, Reaction};
use crate::Translation::species_registry::SpeciesParams;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesRecord {
    pub id: String,
    pub compartment: String,
    pub initial_amount: f64,
    pub units: String,
    pub boundary_condition: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KineticLaw {
    /// mass-action formula, e.g. "k * GTP * GTP * P1_p0"
    pub formula: String,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionRecord {
    pub id: String,
    pub reversible: bool,
    pub reactants: Vec<Participant>,
    pub products: Vec<Participant>,
    pub kinetic_law: KineticLaw,
}

/// In-memory model document serialized to pretty JSON.
/// Mirrors the checks a modeling library performs on every creation call.
#[derive(Debug, Clone, Serialize)]
pub struct JsonModelDocument {
    pub id: String,
    pub units: Option<ModelUnits>,
    pub compartments: IndexMap<String, Compartment>,
    pub parameters: IndexMap<String, Parameter>,
    pub species: IndexMap<String, SpeciesRecord>,
    pub reactions: IndexMap<String, ReactionRecord>,
}

impl JsonModelDocument {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            units: None,
            compartments: IndexMap::new(),
            parameters: IndexMap::new(),
            species: IndexMap::new(),
            reactions: IndexMap::new(),
        }
    }

    fn id_taken(&self, id: &str) -> bool {
        self.compartments.contains_key(id)
            || self.parameters.contains_key(id)
            || self.species.contains_key(id)
            || self.reactions.contains_key(id)
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }
}

impl ModelDocument for JsonModelDocument {
    fn set_units(&mut self, units: &ModelUnits) -> Result<(), DocumentError> {
        self.units = Some(units.clone());
        Ok(())
    }

    fn create_compartment(&mut self, compartment: &Compartment) -> Result<(), DocumentError> {
        if self.id_taken(&compartment.id) {
            return Err(DocumentError::DuplicateId(compartment.id.clone()));
        }
        self.compartments
            .insert(compartment.id.clone(), compartment.clone());
        Ok(())
    }

    fn create_parameter(&mut self, parameter: &Parameter) -> Result<(), DocumentError> {
        if self.id_taken(&parameter.id) {
            return Err(DocumentError::DuplicateId(parameter.id.clone()));
        }
        self.parameters.insert(parameter.id.clone(), parameter.clone());
        Ok(())
    }

    fn create_species(&mut self, name: &str, params: &SpeciesParams) -> Result<(), DocumentError> {
        if self.species.contains_key(name) {
            return Err(DocumentError::DuplicateSpecies(name.to_string()));
        }
        if self.id_taken(name) {
            return Err(DocumentError::DuplicateId(name.to_string()));
        }
        if !self.compartments.contains_key(&params.compartment) {
            return Err(DocumentError::UnknownCompartment {
                species: name.to_string(),
                compartment: params.compartment.clone(),
            });
        }
        self.species.insert(
            name.to_string(),
            SpeciesRecord {
                id: name.to_string(),
                compartment: params.compartment.clone(),
                initial_amount: params.initial_amount,
                units: params.units.clone(),
                boundary_condition: false,
            },
        );
        Ok(())
    }

    fn create_reaction(&mut self, reaction: &Reaction) -> Result<(), DocumentError> {
        let id = reaction.id.to_string();
        if self.reactions.contains_key(&id) {
            return Err(DocumentError::DuplicateReaction(id));
        }
        if self.id_taken(&id) {
            return Err(DocumentError::DuplicateId(id));
        }
        for species in reaction
            .species()
            .into_iter()
            .chain(reaction.rate_law.factors.iter().map(|f| f.as_str()))
        {
            if !self.species.contains_key(species) {
                return Err(DocumentError::UnknownSpecies {
                    owner: id,
                    species: species.to_string(),
                });
            }
        }
        if !self.parameters.contains_key(&reaction.rate_law.constant) {
            return Err(DocumentError::UnknownParameter {
                reaction: id,
                parameter: reaction.rate_law.constant.clone(),
            });
        }
        debug!("document: reaction {} = {}", id, reaction.equation());
        self.reactions.insert(
            id.clone(),
            ReactionRecord {
                id,
                reversible: reaction.reversible,
                reactants: reaction.reactants.clone(),
                products: reaction.products.clone(),
                kinetic_law: KineticLaw {
                    formula: reaction.rate_law.to_string(),
                    parameters: vec![reaction.rate_law.constant.clone()],
                },
            },
        );
        Ok(())
    }

    fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
