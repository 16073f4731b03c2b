use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use vendo::catalog::DEFAULT_SLOT_CAPACITY;
use vendo::change::Breakdown;
use vendo::codec;
use vendo::engine::VendingMachine;
use vendo::session::{Op, OpKind, SessionReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session script CSV file (header `op, value, count`)
    input: PathBuf,

    /// Catalog file, one `name, price, stock, image` line per slot
    #[arg(long, default_value = "drinks.txt")]
    catalog: PathBuf,

    /// Ledger file, one `denomination: count` line per denomination
    #[arg(long, default_value = "cash.txt")]
    ledger: PathBuf,

    /// Number of slots the catalog file must hold
    #[arg(long, default_value_t = DEFAULT_SLOT_CAPACITY)]
    slots: usize,

    /// Write catalog and ledger back after the session
    #[arg(long)]
    save: bool,

    /// Print the final machine state as JSON instead of plain text
    #[arg(long)]
    summary_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (catalog, ledger) =
        codec::load_files(&cli.catalog, &cli.ledger, cli.slots).into_diagnostic()?;
    let mut machine = VendingMachine::new(catalog, ledger);

    let file = File::open(&cli.input).into_diagnostic()?;
    for op_result in SessionReader::new(file).ops() {
        match op_result {
            Ok(op) => apply_op(&mut machine, op),
            Err(e) => eprintln!("Error reading op: {e}"),
        }
    }

    if cli.summary_json {
        let slots: Vec<_> = machine.catalog().iter().map(|slot| slot.product()).collect();
        let summary = serde_json::json!({
            "balance": machine.balance(),
            "total_sales": machine.total_sales(),
            "status": machine.status().label(),
            "slots": slots,
        });
        println!("{summary}");
    } else {
        println!("balance: {}", machine.balance());
        println!("total sales: {}", machine.total_sales());
    }

    if cli.save {
        codec::save_files(&cli.catalog, &cli.ledger, machine.catalog(), machine.ledger())
            .into_diagnostic()?;
    }

    Ok(())
}

fn apply_op(machine: &mut VendingMachine, op: Op) {
    match op.op {
        OpKind::Insert => {
            let Some(denomination) = op.value else {
                eprintln!("Error applying op: insert missing denomination");
                return;
            };
            let amounts = Breakdown::from([(denomination, op.count.unwrap_or(1))]);
            match machine.insert_money(&amounts) {
                Ok(balance) => println!("balance: {balance}"),
                Err(e) => eprintln!("Error applying op: {e}"),
            }
        }
        OpKind::Buy => {
            let Some(slot) = op.value.map(|v| v as usize) else {
                eprintln!("Error applying op: buy missing slot index");
                return;
            };
            let name = machine
                .catalog()
                .get(slot)
                .and_then(|slot| slot.product())
                .map(|product| product.name.clone());
            if machine.purchase(slot) {
                // purchase succeeded, so the slot was occupied and named
                let name = name.unwrap_or_default();
                println!("dispensed: {name}, balance: {}", machine.balance());
            } else {
                println!("not available: slot {slot}");
            }
        }
        OpKind::Refund => {
            let breakdown = machine.refund();
            if !breakdown.is_empty() {
                let coins: Vec<String> = breakdown
                    .iter()
                    .rev()
                    .map(|(denomination, count)| format!("{denomination} x {count}"))
                    .collect();
                println!("refund: {}", coins.join(", "));
            } else if machine.balance() > 0 {
                println!("refund unavailable");
            } else {
                println!("refund: nothing owed");
            }
        }
        OpKind::Restock => {
            let (Some(slot), Some(stock)) = (op.value.map(|v| v as usize), op.count) else {
                eprintln!("Error applying op: restock needs a slot and a stock count");
                return;
            };
            if machine.restock(slot, stock) {
                println!("restocked: slot {slot} to {stock}");
            } else {
                eprintln!("Error applying op: slot {slot} holds no product");
            }
        }
        OpKind::SetCoins => {
            let (Some(denomination), Some(count)) = (op.value, op.count) else {
                eprintln!("Error applying op: setcoins needs a denomination and a count");
                return;
            };
            match machine.set_coin_count(denomination, count) {
                Ok(()) => println!("till: {denomination} = {count}"),
                Err(e) => eprintln!("Error applying op: {e}"),
            }
        }
        OpKind::Status => {
            let status = machine.status();
            println!("status: {}, balance: {}", status.label(), machine.balance());
        }
    }
}
