use std::collections::BTreeMap;

use tracing::info;

use crate::sanitize::SanitizedContacts;

/// How many sanitized contact lists each unregistered number appears in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityDegrees {
    counts: BTreeMap<String, usize>,
}

impl ConnectivityDegrees {
    /// Numbers that appear in no list have degree 0.
    pub fn degree(&self, phone: &str) -> usize {
        self.counts.get(phone).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, usize)> {
        self.counts.iter().map(|(phone, count)| (phone, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn connectivity_degrees(contacts: &SanitizedContacts) -> ConnectivityDegrees {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for phone in contacts.iter().flat_map(|(_, list)| list) {
        *counts.entry(phone.clone()).or_insert(0) += 1;
    }

    info!(numbers = counts.len(), "counted connectivity degrees");
    ConnectivityDegrees { counts }
}
