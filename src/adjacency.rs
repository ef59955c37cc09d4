use tracing::info;

use crate::error::{GraphError, GraphResult};
use crate::registry::Registry;
use crate::sanitize::SanitizedContacts;

/// A registered user followed by the unregistered numbers in their book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyRow {
    pub owner: String,
    pub contacts: Vec<String>,
}

impl AdjacencyRow {
    /// Head first, then the tail in row order.
    pub fn phones(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.owner.as_str()).chain(self.contacts.iter().map(String::as_str))
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contacts
            .iter()
            .map(move |target| (self.owner.as_str(), target.as_str()))
    }
}

pub fn build_adjacency(
    registry: &Registry,
    contacts: &SanitizedContacts,
) -> GraphResult<Vec<AdjacencyRow>> {
    let mut rows = Vec::with_capacity(registry.len());
    for user in registry.iter() {
        let list = contacts
            .get(&user.phone)
            .ok_or_else(|| GraphError::MissingContacts {
                phone: user.phone.clone(),
            })?;
        rows.push(AdjacencyRow {
            owner: user.phone.clone(),
            contacts: list.iter().cloned().collect(),
        });
    }

    info!(rows = rows.len(), "built phone adjacency");
    Ok(rows)
}
