//! caseflow — routing demo CLI
//!
//! Seeds an in-memory case store with fictional triage sessions, loads a
//! clinician roster, and runs the routing scenarios: eligibility listing
//! per clinician and a two-thread claim race on a single case.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- list-eligible
//!   cargo run -p demo -- claim-race
//!   cargo run -p demo -- list-eligible --roster path/to/roster.toml

use std::path::PathBuf;
use std::thread;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use caseflow_contracts::clinician::ClinicianId;
use caseflow_contracts::error::{CaseflowError, CaseflowResult};
use caseflow_eligibility::EligibilityFilter;
use caseflow_roster::TomlRoster;
use caseflow_store::{CaseFilters, CaseStore, InMemoryCaseStore};

mod fixtures;

// ── CLI definition ────────────────────────────────────────────────────────────

/// caseflow — clinician case routing demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "caseflow routing demo",
    long_about = "Runs the caseflow routing scenarios over fixture data:\n\
                  licensing + 50-mile-radius eligibility filtering per clinician,\n\
                  and a race-safe conditional claim on a contested case."
)]
struct Cli {
    /// Path to a clinician roster TOML; defaults to the built-in demo roster.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run both scenarios in sequence.
    RunAll,
    /// Scenario 1: list the eligible cases for every rostered clinician.
    ListEligible,
    /// Scenario 2: two clinicians race to claim the same case.
    ClaimRace,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = load_roster(cli.roster.as_deref()).and_then(|roster| match cli.command {
        Command::RunAll => {
            run_list_eligible(&roster)?;
            run_claim_race(&roster)
        }
        Command::ListEligible => run_list_eligible(&roster),
        Command::ClaimRace => run_claim_race(&roster),
    });

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_roster(path: Option<&std::path::Path>) -> CaseflowResult<TomlRoster> {
    match path {
        Some(path) => TomlRoster::from_file(path),
        None => TomlRoster::from_toml_str(include_str!("../roster.toml")),
    }
}

// ── Scenario 1: eligibility listing ───────────────────────────────────────────

fn run_list_eligible(roster: &TomlRoster) -> CaseflowResult<()> {
    println!("Scenario 1: eligibility listing");
    println!("-------------------------------");

    let store = InMemoryCaseStore::with_cases(fixtures::seed_cases());
    let candidates = store.fetch_cases(&CaseFilters::default())?;
    println!("{} cases in the store\n", candidates.len());

    for profile in roster.profiles() {
        println!("{} ({}):", profile.display_name, profile.id);

        let filter = match EligibilityFilter::for_clinician(profile) {
            Ok(filter) => filter,
            Err(CaseflowError::Configuration { reason }) => {
                // An incomplete profile cannot determine eligibility at all;
                // surfaced as such, never shown as an empty case list.
                println!("  cannot determine eligible cases: {}\n", reason);
                continue;
            }
            Err(e) => return Err(e),
        };

        let visible = filter.filter_cases(&candidates);
        if visible.is_empty() {
            println!("  no eligible cases");
        }
        for case in &visible {
            println!(
                "  [{:?}] {} — {} — {}",
                case.urgency_level,
                case.status.as_str(),
                case.patient_state.0,
                case.initial_symptoms.as_deref().unwrap_or("(no symptoms recorded)"),
            );
        }
        println!();
    }

    Ok(())
}

// ── Scenario 2: claim race ────────────────────────────────────────────────────

fn run_claim_race(roster: &TomlRoster) -> CaseflowResult<()> {
    println!("Scenario 2: claim race");
    println!("----------------------");

    let store = InMemoryCaseStore::with_cases(fixtures::seed_cases());

    // Pick the contested case: the first one eligible for dr-rivera.
    let rivera = roster.profile(&ClinicianId::new("dr-rivera"))?;
    let filter = EligibilityFilter::for_clinician(rivera)?;
    let candidates = store.fetch_cases(&CaseFilters::default())?;
    let contested = filter
        .filter_cases(&candidates)
        .into_iter()
        .find(|c| c.status.is_claimable())
        .ok_or_else(|| CaseflowError::Configuration {
            reason: "demo fixtures contain no claimable eligible case".to_string(),
        })?;

    println!(
        "Contested case: {} ({})\n",
        contested.id,
        contested.initial_symptoms.as_deref().unwrap_or("?"),
    );

    // Both CA clinicians see this case in their eligible lists.
    let claimants = ["dr-rivera", "dr-nguyen"];
    let mut handles = Vec::new();
    for name in claimants {
        let store = store.clone();
        let case_id = contested.id.clone();
        let clinician = ClinicianId::new(name);
        handles.push(thread::spawn(move || {
            let outcome = store.claim_case(&case_id, &clinician);
            (clinician, outcome)
        }));
    }

    for handle in handles {
        let (clinician, outcome) = handle.join().expect("claim thread panicked");
        match outcome {
            Ok(case) => println!(
                "  {} claimed the case (status: {})",
                clinician,
                case.status.as_str()
            ),
            Err(e) => println!("  {} lost the race: {}", clinician, e),
        }
    }

    let final_state = store
        .fetch_cases(&CaseFilters::default())?
        .into_iter()
        .find(|c| c.id == contested.id)
        .expect("contested case vanished from the store");
    println!(
        "\nFinal stored state: status={}, assigned to {}\n",
        final_state.status.as_str(),
        final_state
            .assigned_clinician_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "nobody".to_string()),
    );

    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("caseflow — clinician case routing");
    println!("=================================");
    println!();
    println!("Routing pipeline per clinician:");
    println!("  [1] Load roster profile (location + licensed jurisdictions)");
    println!("  [2] Fetch candidate cases, newest first");
    println!("  [3] Eligibility filter: licensed state AND within 50 miles");
    println!("  [4] Claim is an atomic conditional write; losers refetch");
    println!();
}
