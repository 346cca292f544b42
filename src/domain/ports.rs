use super::member::MemberBillingRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for member billing records.
///
/// Implementations are the single place where raw stored data becomes a
/// `MemberBillingRecord`.
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn store(&self, record: MemberBillingRecord) -> Result<()>;
    async fn get(&self, member: u32) -> Result<Option<MemberBillingRecord>>;
    /// All stored records, ordered by member id.
    async fn all_members(&self) -> Result<Vec<MemberBillingRecord>>;
}

pub type MemberStoreBox = Box<dyn MemberStore>;
