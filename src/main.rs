use clap::{Parser, Subcommand};
use futures::StreamExt;
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wallet::application::service::WalletService;
use wallet::config::{DEFAULT_PROGRESS_WORKERS, EngineConfig};
use wallet::domain::account::{AccountId, Money};

/// Keeps the deposit for amounts 1..=N within `i64`.
const MAX_DEMO_PAYMENTS: i64 = 4_000_000_000;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Workers used by the progress-reporting sum
    #[arg(long, default_value_t = DEFAULT_PROGRESS_WORKERS, global = true)]
    progress_workers: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate payments for one account and sum them both ways
    Demo {
        /// Number of payments, with amounts 1..=N
        #[arg(
            long,
            default_value_t = 1_000,
            value_parser = clap::value_parser!(i64).range(0..=MAX_DEMO_PAYMENTS)
        )]
        payments: i64,
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
    /// Sum every payment of a dump directory
    Sum {
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
    /// Print partial sums as workers finish, then the total
    Progress {
        #[arg(long)]
        data: PathBuf,
    },
    /// Print the payments of one account as JSON lines
    Filter {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        account: AccountId,
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
    /// Write the payment history of one account to files
    History {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        account: AccountId,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        records: usize,
    },
    /// Export the accounts of a dump directory to a single file
    Export {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let mut svc = WalletService::with_config(EngineConfig::new(cli.progress_workers));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Demo { payments, workers } => {
            let account = svc.register_account("+992000000001").into_diagnostic()?;
            let needed = payments.max(1) * (payments.max(1) + 1) / 2;
            svc.deposit(account.id, Money::new(needed)).into_diagnostic()?;
            for amount in 1..=payments {
                svc.pay(account.id, Money::new(amount), "auto").into_diagnostic()?;
            }

            writeln!(out, "sum: {}", svc.sum_payments(workers).await).into_diagnostic()?;
            let total: Money = svc
                .sum_payments_with_progress()
                .map(|progress| progress.result)
                .collect::<Vec<_>>()
                .await
                .into_iter()
                .sum();
            writeln!(out, "progress total: {total}").into_diagnostic()?;
        }
        Command::Sum { data, workers } => {
            svc.import(&data).await.into_diagnostic()?;
            writeln!(out, "{}", svc.sum_payments(workers).await).into_diagnostic()?;
        }
        Command::Progress { data } => {
            svc.import(&data).await.into_diagnostic()?;
            let mut stream = svc.sum_payments_with_progress();
            let mut total = Money::ZERO;
            while let Some(progress) = stream.next().await {
                total += progress.result;
                let line = serde_json::to_string(&progress).into_diagnostic()?;
                writeln!(out, "{line}").into_diagnostic()?;
            }
            writeln!(out, "total: {total}").into_diagnostic()?;
        }
        Command::Filter {
            data,
            account,
            workers,
        } => {
            svc.import(&data).await.into_diagnostic()?;
            for payment in svc.filter_payments(account, workers).await.into_diagnostic()? {
                let line = serde_json::to_string(&payment).into_diagnostic()?;
                writeln!(out, "{line}").into_diagnostic()?;
            }
        }
        Command::History {
            data,
            account,
            out: dir,
            records,
        } => {
            svc.import(&data).await.into_diagnostic()?;
            let payments = svc.export_account_history(account).into_diagnostic()?;
            svc.history_to_files(&payments, &dir, records)
                .await
                .into_diagnostic()?;
            writeln!(out, "{} payments written", payments.len()).into_diagnostic()?;
        }
        Command::Export { data, out: path } => {
            svc.import(&data).await.into_diagnostic()?;
            svc.export_to_file(&path).await.into_diagnostic()?;
            writeln!(out, "{} accounts exported", svc.ledger().accounts().len())
                .into_diagnostic()?;
        }
    }

    Ok(())
}
