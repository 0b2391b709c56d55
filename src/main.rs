//! # Employee greeter
//!
//! Prints a greeting for an employee, or the employee as JSON.
//!
//! # Arguments:
//!
//! - **name** required
//! - **--salary** default: none
//! - **--greeting** default: Hello
//! - **--json** print the employee instead of the greeting

use std::env;
use std::process;

use anyhow::{Context, Result};
use employee::arguments::{self, Arguments};
use env_logger::{Builder, Env};
use log::{debug, error, info};

fn render(arguments: &Arguments) -> Result<String> {
    let employee = arguments.employee();
    debug!(
        "Employee {:?} with salary {:?}, greeting {:?}",
        employee.name(),
        employee.salary(),
        arguments.greeting
    );

    if arguments.json {
        info!("Printing employee as JSON");
        serde_json::to_string_pretty(&employee).context("Failed to serialize employee")
    } else {
        info!("Greeting employee");
        Ok(employee.greet_employee(arguments.greeting.as_deref()))
    }
}

fn run() -> Result<String> {
    let arguments = arguments::parse_arguments(env::args())?;
    render(&arguments)
}

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

fn main() {
    logger_init();
    match run() {
        Ok(output) => println!("{output}"),
        Err(err_msg) => {
            error!("Error: {}", err_msg);
            process::exit(1);
        }
    }
}
