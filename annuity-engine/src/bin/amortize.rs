//! Amortization schedule CLI
//!
//! Computes the fixed monthly payment for a loan, records the full schedule
//! in a hash-chained ledger, prints it as a table with per-block hash
//! prefixes, and reports the chain integrity verdict.

use annuity_engine::{LoanTerms, Schedule};
use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

/// Fixed-payment amortization schedule with a tamper-evident ledger
#[derive(Parser, Debug)]
#[command(name = "amortize", version, about)]
struct Args {
    /// Amount borrowed
    #[arg(long, default_value = "250000")]
    principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long, default_value = "6.5")]
    annual_rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    years: u32,

    /// Load loan terms from a TOML file instead of flags
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit the schedule as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// One schedule row for JSON export
#[derive(Serialize)]
struct Row {
    month: u32,
    payment: Decimal,
    principal_paid: Decimal,
    interest_paid: Decimal,
    remaining_balance: Decimal,
    block_hash: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let terms = match &args.config {
        Some(path) => LoanTerms::from_file(path)?,
        None => {
            let terms = LoanTerms {
                principal: args.principal,
                annual_rate: args.annual_rate,
                years: args.years,
            };
            terms.validate()?;
            terms
        }
    };

    let schedule = Schedule::generate(terms)?;

    if args.json {
        let rows: Vec<Row> = schedule
            .payments()
            .map(|block| Row {
                month: block.payload().month,
                payment: block.payload().payment,
                principal_paid: block.payload().principal_paid,
                interest_paid: block.payload().interest_paid,
                remaining_balance: block.payload().remaining_balance,
                block_hash: block.hash_hex(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_summary(&schedule);
        print_table(&schedule);
    }

    // Integrity verdict after the full schedule is on the chain
    schedule.verify()?;
    if !args.json {
        println!();
        println!(
            "Ledger integrity check passed ({} blocks)",
            schedule.ledger().len()
        );
    }

    Ok(())
}

fn print_summary(schedule: &Schedule) {
    let terms = schedule.terms();
    println!(
        "Loan: {} at {}% over {} years",
        terms.principal, terms.annual_rate, terms.years
    );
    println!("Monthly payment:  {:>14}", schedule.monthly_payment().round_dp(2));
    println!("Total interest:   {:>14}", schedule.total_interest());
    println!("Total cost:       {:>14}", schedule.total_cost());
    println!();
}

fn print_table(schedule: &Schedule) {
    println!(
        "{:>5}  {:>12}  {:>12}  {:>12}  {:>14}  {}",
        "Month", "Payment", "Principal", "Interest", "Balance", "Block Hash"
    );

    for block in schedule.payments() {
        let p = block.payload();
        println!(
            "{:>5}  {:>12}  {:>12}  {:>12}  {:>14}  {}",
            p.month,
            p.payment,
            p.principal_paid,
            p.interest_paid,
            p.remaining_balance,
            block.short_hash(),
        );
    }
}
