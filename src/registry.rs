use std::collections::BTreeMap;

use tracing::info;

use crate::contacts::ContactRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub phone: String,
    pub account_id: String,
    pub display_name: String,
    pub internal_name: String,
}

/// Registered users keyed by phone number, iterated in ascending phone order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    users: BTreeMap<String, RegisteredUser>,
}

impl Registry {
    pub fn contains(&self, phone: &str) -> bool {
        self.users.contains_key(phone)
    }

    pub fn get(&self, phone: &str) -> Option<&RegisteredUser> {
        self.users.get(phone)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredUser> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Later records with an already seen phone number replace the earlier entry.
pub fn extract_registry(records: &[ContactRecord]) -> Registry {
    let mut users = BTreeMap::new();
    for record in records {
        users.insert(
            record.phone.clone(),
            RegisteredUser {
                phone: record.phone.clone(),
                account_id: record.account_id.clone(),
                display_name: record.display_name.clone(),
                internal_name: record.internal_name.clone(),
            },
        );
    }

    info!(users = users.len(), "extracted registered users");
    Registry { users }
}
