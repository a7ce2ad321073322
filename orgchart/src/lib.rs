pub mod employees;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::Table;
use orgchart_tree::EmployeeId;
use orgchart_view::{roster, supervisor_chain, RosterEntry};
use thiserror::Error;

use crate::employees::{EmployeesConfig, EmployeesError};

#[derive(Parser, Debug)]
#[command(name = "orgchart", about = "Browse an organizational hierarchy.", version)]
pub struct Cli {
    /// Path to the employees JSON file. Default: ./employees.json.
    #[arg(
        long = "data",
        value_name = "PATH",
        env = "ORGCHART_EMPLOYEES_PATH",
        global = true
    )]
    pub data: Option<PathBuf>,

    /// Log level (e.g., trace, debug, info, warn, error). Default: info.
    #[arg(long = "log", value_name = "LEVEL", default_value = "info", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every employee, root first then depth-first by subordinate order.
    List {
        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show the chain of supervisors leading to an employee.
    Chain {
        /// Id of the employee to look up.
        id: EmployeeId,

        /// Print as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Employees(#[from] EmployeesError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = EmployeesConfig::load(cli.data.as_deref()).await?;

    match cli.command {
        Command::List { json } => {
            let entries = roster(config.table());
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_roster(&entries);
            }
        }
        Command::Chain { id, json } => {
            let chain = supervisor_chain(Some(id), config.table());
            if json {
                println!("{}", serde_json::to_string_pretty(&chain)?);
            } else {
                println!("{chain}");
            }
        }
    }

    Ok(())
}

fn print_roster(entries: &[RosterEntry]) {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
        .set_header(vec!["id", "name"]);

    for entry in entries {
        table.add_row(vec![&entry.id.to_string(), &entry.display_name]);
    }

    println!("{table}")
}
