//! Variant classification for spawn point definitions.
//!
//! Classification never fails. A definition that names no payload is repaired
//! to an empty Clue payload; one that names several resolves to the highest
//! priority payload and keeps the others. Each problem is reported once per
//! definition: the repair makes the first case well-formed, and the second is
//! remembered on the definition itself.

use crate::def::SpawnPointDef;
use crate::def::SpawnVariant;
use crate::kind::SpawnKind;

/// A broken exactly-one-payload rule on a definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VariantViolation {
    #[error("spawn point definition '{name}' didn't specify a spawn type")]
    Missing { name: String },

    #[error(
        "spawn point definition '{name}' specified more than one spawn type ({})",
        .present.join(", ")
    )]
    Ambiguous {
        name: String,
        present: Vec<&'static str>,
    },
}

/// Result of classifying a definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: SpawnKind,
    /// The violation reported by this call, if any.
    ///
    /// `None` on later calls for a definition that was already reported.
    pub violation: Option<VariantViolation>,
}

impl Classification {
    /// Returns true if this call reported a violation.
    pub fn is_violation(&self) -> bool {
        self.violation.is_some()
    }
}

impl SpawnPointDef {
    /// Resolves this definition to a single kind, repairing it if needed.
    ///
    /// Requires exclusive access: a definition with no payload gets an empty
    /// Clue payload installed. Loaders call this before a definition is shared.
    pub fn classify(&mut self) -> Classification {
        let present = self.present_variants();

        let violation = match present.len() {
            0 => {
                self.clue = Some(Default::default());
                Some(VariantViolation::Missing {
                    name: self.name.clone(),
                })
            }
            1 => None,
            _ if self.ambiguity_reported => None,
            _ => {
                self.ambiguity_reported = true;
                Some(VariantViolation::Ambiguous {
                    name: self.name.clone(),
                    present: present.iter().map(SpawnVariant::field_name).collect(),
                })
            }
        };

        if let Some(violation) = &violation {
            tracing::error!(definition = %self.name, "{}", violation);
        }

        Classification {
            kind: self.kind(),
            violation,
        }
    }
}
