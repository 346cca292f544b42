use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use gymdues::application::engine::BillingService;
use gymdues::config::BillingPolicy;
use gymdues::domain::money::Money;
use gymdues::domain::ports::MemberStoreBox;
use gymdues::domain::status::PaymentStatus;
use gymdues::infrastructure::in_memory::InMemoryMemberStore;
use gymdues::interfaces::csv::member_reader::MemberReader;
use gymdues::interfaces::csv::payment_reader::PaymentReader;
use gymdues::interfaces::csv::statement_writer::StatementWriter;
use gymdues::interfaces::json;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusFilter {
    Overdue,
    #[value(name = "due_today")]
    DueToday,
    #[value(name = "due_soon")]
    DueSoon,
    Active,
}

impl From<StatusFilter> for PaymentStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Overdue => PaymentStatus::Overdue,
            StatusFilter::DueToday => PaymentStatus::DueToday,
            StatusFilter::DueSoon => PaymentStatus::DueSoon,
            StatusFilter::Active => PaymentStatus::Active,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Member billing records CSV file
    members: PathBuf,

    /// Payments CSV file, applied in file order
    #[arg(long)]
    payments: Option<PathBuf>,

    /// Day to report statements for (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// TOML billing policy file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the policy's due-soon window
    #[arg(long)]
    due_soon_days: Option<u32>,

    /// Overrides the policy's cycle price
    #[arg(long)]
    cycle_price: Option<Decimal>,

    /// Let a payment worth several cycles cover all of them
    #[arg(long)]
    multi_cycle: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Only print members with this status
    #[arg(long, value_enum)]
    status: Option<StatusFilter>,
}

impl Cli {
    fn policy(&self) -> Result<BillingPolicy> {
        let mut policy = match &self.config {
            Some(path) => BillingPolicy::load(path).into_diagnostic()?,
            None => BillingPolicy::default(),
        };
        if let Some(days) = self.due_soon_days {
            policy.due_soon_window_days = days;
        }
        if let Some(price) = self.cycle_price {
            policy.cycle_price = Some(Money::new(price));
        }
        if self.multi_cycle {
            policy.multi_cycle_payments = true;
        }
        Ok(policy)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = cli.policy()?;
    // The clock is read here and nowhere else
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let store: MemberStoreBox = Box::new(InMemoryMemberStore::new());
    let service = BillingService::new(store, policy);

    let file = File::open(&cli.members).into_diagnostic()?;
    for record in MemberReader::new(file).members() {
        match record {
            Ok(record) => {
                let member = record.member;
                if let Err(e) = service.register_member(record).await {
                    warn!(member, "Error registering member: {}", e);
                }
            }
            Err(e) => warn!("Error reading member: {}", e),
        }
    }

    if let Some(path) = &cli.payments {
        let file = File::open(path).into_diagnostic()?;
        for payment in PaymentReader::new(file).payments() {
            match payment {
                Ok(payment) => {
                    if let Err(e) = service.record_payment(payment).await {
                        warn!("Error processing payment: {}", e);
                    }
                }
                Err(e) => warn!("Error reading payment: {}", e),
            }
        }
    }

    let mut statements = service.statements(today).await.into_diagnostic()?;
    if let Some(filter) = cli.status {
        let wanted = PaymentStatus::from(filter);
        statements.retain(|s| s.status == wanted);
    }
    info!(%today, count = statements.len(), "statements ready");

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => StatementWriter::new(stdout.lock())
            .write_statements(statements)
            .into_diagnostic()?,
        OutputFormat::Json => json::write_statements(stdout.lock(), &statements).into_diagnostic()?,
    }

    Ok(())
}
