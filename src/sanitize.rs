use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::contacts::ContactRecord;
use crate::registry::Registry;

/// Each owner's contacts with every registered number removed.
#[derive(Debug, Clone, Default)]
pub struct SanitizedContacts {
    lists: BTreeMap<String, BTreeSet<String>>,
}

impl SanitizedContacts {
    pub fn get(&self, owner: &str) -> Option<&BTreeSet<String>> {
        self.lists.get(owner)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

pub fn sanitize_contacts(records: &[ContactRecord], registry: &Registry) -> SanitizedContacts {
    let mut lists = BTreeMap::new();
    for record in records {
        let contacts: BTreeSet<String> = record
            .contacts
            .iter()
            .filter(|phone| !registry.contains(phone))
            .cloned()
            .collect();
        lists.insert(record.phone.clone(), contacts);
    }

    info!(
        owners = lists.len(),
        contacts = lists.values().map(BTreeSet::len).sum::<usize>(),
        "removed registered users from contact lists"
    );
    SanitizedContacts { lists }
}
