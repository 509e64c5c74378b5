//! Cellar Demo Binary
//!
//! Runs the classic student-table scenario end to end against the
//! in-memory store: create a table, load a few records, scan a single
//! column and a whole family, delete a row, overwrite a cell, and
//! scan again. A real cluster client would slot in through the same
//! `StoreClient` interface.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cellar::{Config, MemoryStore, Result, ScanValues, TableFacade};

/// Cellar Demo
#[derive(Parser, Debug)]
#[command(name = "cellar-demo")]
#[command(about = "End-to-end demo of the Cellar column-family facade")]
#[command(version)]
struct Args {
    /// Coordination-service quorum hosts (comma-separated)
    #[arg(short, long, default_value = "127.0.0.1")]
    quorum_hosts: String,

    /// Coordination-service client port
    #[arg(short, long, default_value = "2181")]
    client_port: u16,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cellar=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("Cellar Demo v{}", cellar::VERSION);

    let config = Config::builder()
        .quorum_hosts(args.quorum_hosts.split(','))
        .client_port(args.client_port)
        .build();

    if let Err(e) = run(&config) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let facade = TableFacade::<MemoryStore>::connect(config)?;
    let table = "Student";

    facade.create_table(table, &["info", "score"])?;

    facade.add_record(
        table,
        "Zhangsan",
        &["info:id", "info:sex", "info:age"],
        &["2015001", "male", "23"],
    )?;
    facade.add_record(
        table,
        "Marry",
        &["info:id", "info:sex", "info:age"],
        &["2015002", "female", "22"],
    )?;
    facade.add_record(
        table,
        "Lisi",
        &["info:id", "info:sex", "info:age"],
        &["2015003", "male", "24"],
    )?;

    facade.add_record(
        table,
        "Zhangsan",
        &["score:Math", "score:English"],
        &["86", "69"],
    )?;
    facade.add_record(
        table,
        "Marry",
        &["score:ComputerScience", "score:English"],
        &["77", "99"],
    )?;
    facade.add_record(
        table,
        "Lisi",
        &["score:Math", "score:ComputerScience"],
        &["98", "95"],
    )?;

    print_scan("score:Math", facade.scan_column(table, "score:Math")?);
    print_scan("score", facade.scan_column(table, "score")?);

    facade.delete_row(table, "Zhangsan")?;
    facade.modify_data(table, "Lisi", "score:Math", "100")?;

    print_scan("score (after delete + modify)", facade.scan_column(table, "score")?);

    facade.close()
}

/// Print one scan outcome, spelling out the empty-result signal
fn print_scan(label: &str, values: ScanValues) {
    println!("--- scan {} ---", label);
    match values {
        None => println!("(no result)"),
        Some(values) => {
            for value in values {
                match value {
                    Some(value) => println!("{}", value),
                    None => println!("(absent)"),
                }
            }
        }
    }
}
