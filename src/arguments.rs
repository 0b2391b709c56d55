//! Command line arguments for the `employee` binary.
//!
//! # Usage:
//!
//! `employee <name> [--salary <integer>] [--greeting <text>] [--json]`
//!
//! - **salary** default: none
//! - **greeting** default: [`DEFAULT_GREETING`](crate::DEFAULT_GREETING)

use std::num::ParseIntError;

use thiserror::Error;

use crate::Employee;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Missing employee name!")]
    MissingName,
    #[error("Missing value for {0}!")]
    MissingValue(String),
    #[error("Invalid salary {value}: {source}")]
    InvalidSalary {
        value: String,
        source: ParseIntError,
    },
    #[error("Unknown argument: {0}!")]
    UnknownFlag(String),
    #[error("Unexpected argument: {0}!")]
    Unexpected(String),
    #[error("Argument {0} given more than once!")]
    Repeated(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Arguments {
    pub name: String,
    pub salary: Option<i32>,
    pub greeting: Option<String>,
    pub json: bool,
}

impl Arguments {
    pub fn employee(&self) -> Employee {
        Employee::new(self.name.clone(), self.salary)
    }
}

/// Parses the full argument vector, program name included.
pub fn parse_arguments<I>(arguments: I) -> Result<Arguments, ArgumentError>
where
    I: IntoIterator<Item = String>,
{
    let mut arguments = arguments.into_iter().skip(1);
    let mut name = None;
    let mut salary = None;
    let mut greeting = None;
    let mut json = false;

    while let Some(argument) = arguments.next() {
        match argument.as_str() {
            "--salary" => {
                let value = flag_value(&mut arguments, &argument, salary.is_some())?;
                let parsed = value
                    .parse::<i32>()
                    .map_err(|source| ArgumentError::InvalidSalary { value, source })?;
                salary = Some(parsed);
            }
            "--greeting" => {
                greeting = Some(flag_value(&mut arguments, &argument, greeting.is_some())?);
            }
            "--json" => {
                if json {
                    return Err(ArgumentError::Repeated(argument));
                }
                json = true;
            }
            _ if argument.starts_with("--") => {
                return Err(ArgumentError::UnknownFlag(argument));
            }
            _ if name.is_none() => name = Some(argument),
            _ => return Err(ArgumentError::Unexpected(argument)),
        }
    }

    Ok(Arguments {
        name: name.ok_or(ArgumentError::MissingName)?,
        salary,
        greeting,
        json,
    })
}

fn flag_value<I>(arguments: &mut I, flag: &str, seen: bool) -> Result<String, ArgumentError>
where
    I: Iterator<Item = String>,
{
    if seen {
        return Err(ArgumentError::Repeated(flag.to_string()));
    }
    arguments
        .next()
        .ok_or_else(|| ArgumentError::MissingValue(flag.to_string()))
}
