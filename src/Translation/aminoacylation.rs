//! # tRNA charging
//!
//! One `<carrier>_Aminoacylation` reaction per distinct carrier of the carrier
//! table:
//! ```text
//! <substrate> + ATP + <carrier> -> AMP + PPI + aminoacylated_<carrier>
//! ```
//! Carriers of the initiator code are charged in two steps: aminoacylation
//! gives `methionyl_<carrier>`, then `<carrier>_Formylation` uses the formyl
//! donor to give the loaded initiator tRNA.
//! ```text
//! methionyl_<carrier> + FTHF10 + H2O -> THF + aminoacylated_<carrier>
//! ```
//! A carrier listed under two codes is charged once, under the first code in
//! table order.
use crate::Translation::carrier_map::CarrierMap;
use crate::Translation::errors::TranslationError;
use crate::Translation::network_builder::NetworkBuilder;
use crate::Translation::reaction_set::{Participant, RateLaw, Reaction, ReactionId};
use crate::library_manager::GeneratorConfig;
use log::debug;
use std::collections::HashSet;

pub const METHIONYL_PREFIX: &str = "methionyl_";

fn charging_reaction(config: &GeneratorConfig, substrate: &str, carrier: &str, charged: &str) -> Reaction {
    let m = &config.machinery;
    Reaction::new(
        ReactionId::Aminoacylation {
            carrier: carrier.to_string(),
        },
        vec![
            Participant::new(substrate),
            Participant::new(&m.atp),
            Participant::new(carrier),
        ],
        vec![
            Participant::new(&m.amp),
            Participant::new(&m.pyrophosphate),
            Participant::new(charged),
        ],
        RateLaw::new(&config.rate_constant, &[substrate, &m.atp, carrier]),
    )
}

fn formylation_reaction(config: &GeneratorConfig, carrier: &str) -> Reaction {
    let m = &config.machinery;
    let methionyl = format!("{}{}", METHIONYL_PREFIX, carrier);
    Reaction::new(
        ReactionId::Formylation {
            carrier: carrier.to_string(),
        },
        vec![
            Participant::new(&methionyl),
            Participant::new(&m.formyl_donor),
            Participant::new(&m.water),
        ],
        vec![
            Participant::new(&m.formyl_donor_spent),
            Participant::new(&CarrierMap::loaded_carrier(carrier)),
        ],
        RateLaw::new(&config.rate_constant, &[&methionyl, &m.formyl_donor]),
    )
}

/// Emits the charging block. Returns the number of reactions emitted.
pub fn build_aminoacylation(net: &mut NetworkBuilder) -> Result<usize, TranslationError> {
    let initiator = net.config.initiator_code;
    let mut charged: HashSet<String> = HashSet::new();
    let mut reactions = Vec::new();
    for (code, entry) in net.carriers.iter() {
        for carrier in &entry.carriers {
            if !charged.insert(carrier.clone()) {
                debug!("carrier {} already charged, skipping it under '{}'", carrier, code);
                continue;
            }
            if code == initiator {
                let methionyl = format!("{}{}", METHIONYL_PREFIX, carrier);
                reactions.push(charging_reaction(net.config, &entry.substrate, carrier, &methionyl));
                reactions.push(formylation_reaction(net.config, carrier));
            } else {
                let loaded = CarrierMap::loaded_carrier(carrier);
                reactions.push(charging_reaction(net.config, &entry.substrate, carrier, &loaded));
            }
        }
    }
    let count = reactions.len();
    for reaction in reactions {
        net.emit(reaction)?;
    }
    Ok(count)
}
