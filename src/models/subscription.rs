use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A subscription visible to the service principal. `id` is the bare
/// subscription GUID, not the `/subscriptions/...` ARM path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "subscriptionId")]
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl Subscription {
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
