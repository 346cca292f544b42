use crate::domain::member::MemberBillingRecord;
use crate::domain::ports::MemberStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for member billing records.
///
/// Uses `Arc<RwLock<BTreeMap<u32, MemberBillingRecord>>>` so clones share the
/// same data and `all_members` comes back ordered by member id.
#[derive(Default, Clone)]
pub struct InMemoryMemberStore {
    members: Arc<RwLock<BTreeMap<u32, MemberBillingRecord>>>,
}

impl InMemoryMemberStore {
    /// Creates a new, empty in-memory member store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn store(&self, record: MemberBillingRecord) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert(record.member, record);
        Ok(())
    }

    async fn get(&self, member: u32) -> Result<Option<MemberBillingRecord>> {
        let members = self.members.read().await;
        Ok(members.get(&member).cloned())
    }

    async fn all_members(&self) -> Result<Vec<MemberBillingRecord>> {
        let members = self.members.read().await;
        Ok(members.values().cloned().collect())
    }
}
