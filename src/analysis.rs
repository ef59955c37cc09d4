use crate::adjacency::{build_adjacency, AdjacencyRow};
use crate::contacts::ContactRecord;
use crate::error::GraphResult;
use crate::popularity::{connectivity_degrees, ConnectivityDegrees};
use crate::registry::{extract_registry, Registry};
use crate::sanitize::{sanitize_contacts, SanitizedContacts};

/// Everything derived from one batch of contact records, ready for rendering.
#[derive(Debug, Clone)]
pub struct ContactBookAnalysis {
    pub registry: Registry,
    pub contacts: SanitizedContacts,
    pub degrees: ConnectivityDegrees,
    pub rows: Vec<AdjacencyRow>,
}

impl ContactBookAnalysis {
    pub fn from_records(records: &[ContactRecord]) -> GraphResult<Self> {
        let registry = extract_registry(records);
        let contacts = sanitize_contacts(records, &registry);
        let degrees = connectivity_degrees(&contacts);
        let rows = build_adjacency(&registry, &contacts)?;

        Ok(Self {
            registry,
            contacts,
            degrees,
            rows,
        })
    }
}
