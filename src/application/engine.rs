use crate::config::BillingPolicy;
use crate::domain::cycle;
use crate::domain::member::MemberBillingRecord;
use crate::domain::money::Money;
use crate::domain::payment::PaymentEvent;
use crate::domain::ports::MemberStoreBox;
use crate::domain::status::{PaymentStatus, classify_status};
use crate::error::{BillingError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

/// A member's billing position as of one day.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct MemberStatement {
    pub member: u32,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub days_until_due: i64,
    pub cycles_outstanding: u32,
    /// Only known when the policy prices a cycle.
    pub amount_outstanding: Option<Money>,
}

/// Applies payments to stored members and reports where each member stands.
///
/// `BillingService` owns the member store and the billing policy. Payments are
/// applied one at a time, each read-modify-write awaited before the next, so a
/// member's due date is never computed from a stale snapshot.
pub struct BillingService {
    member_store: MemberStoreBox,
    policy: BillingPolicy,
}

impl BillingService {
    /// Creates a new `BillingService`.
    ///
    /// # Arguments
    ///
    /// * `member_store` - The store holding member billing records.
    /// * `policy` - Settings applied to every member.
    pub fn new(member_store: MemberStoreBox, policy: BillingPolicy) -> Self {
        Self {
            member_store,
            policy,
        }
    }

    /// Validates and stores a member record.
    ///
    /// Records whose schedule cannot be computed are refused with the
    /// underlying error instead of being stored.
    pub async fn register_member(&self, record: MemberBillingRecord) -> Result<()> {
        cycle::current_due_date(&record)?;
        self.member_store.store(record).await
    }

    /// Applies `payment` and persists the resulting due date.
    ///
    /// Returns the member's new due date.
    pub async fn record_payment(&self, payment: PaymentEvent) -> Result<NaiveDate> {
        let mut record = self
            .member_store
            .get(payment.member)
            .await?
            .ok_or(BillingError::UnknownMember(payment.member))?;

        let cycles = self.cycles_paid_for(&payment);
        let next_due = cycle::next_due_date_for_cycles(&record, &payment, cycles)?;
        debug!(
            member = payment.member,
            paid_on = %payment.paid_on,
            cycles,
            %next_due,
            "payment applied"
        );

        record.last_due_date = Some(next_due);
        self.member_store.store(record).await?;
        Ok(next_due)
    }

    fn cycles_paid_for(&self, payment: &PaymentEvent) -> u32 {
        if !self.policy.multi_cycle_payments {
            return 1;
        }
        match payment.amount_paid {
            Some(amount) => cycle::cycles_covered_by_payment(
                amount.value(),
                self.policy.cycle_price.map(|price| price.0),
            ),
            None => 1,
        }
    }

    /// Builds the statement for a single record.
    pub fn statement(
        &self,
        record: &MemberBillingRecord,
        today: NaiveDate,
    ) -> Result<MemberStatement> {
        let due_date = cycle::current_due_date(record)?;
        let cycles_outstanding = cycle::cycles_overdue(record, today)?;
        let amount_outstanding = self
            .policy
            .cycle_price
            .map(|price| {
                price.checked_mul(cycles_outstanding).ok_or_else(|| {
                    BillingError::ValidationError(format!(
                        "Outstanding amount for member {} exceeds the supported range",
                        record.member
                    ))
                })
            })
            .transpose()?;

        Ok(MemberStatement {
            member: record.member,
            due_date,
            status: classify_status(due_date, today, self.policy.due_soon_window_days),
            days_until_due: cycle::days_until_due(due_date, today),
            cycles_outstanding,
            amount_outstanding,
        })
    }

    /// Statements for every stored member, ordered by member id.
    ///
    /// A member whose schedule cannot be computed is logged and left out.
    pub async fn statements(&self, today: NaiveDate) -> Result<Vec<MemberStatement>> {
        let members = self.member_store.all_members().await?;
        let mut statements = Vec::with_capacity(members.len());

        for record in &members {
            match self.statement(record, today) {
                Ok(statement) => statements.push(statement),
                Err(e) => warn!(member = record.member, "Skipping member: {}", e),
            }
        }

        statements.sort_by_key(|s| s.member);
        Ok(statements)
    }

    /// Consumes the service and returns the final state of all members.
    pub async fn into_members(self) -> Result<Vec<MemberBillingRecord>> {
        self.member_store.all_members().await
    }
}
