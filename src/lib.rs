//! # employee
//!
//! An employee with a name, an optional salary and a greeting that falls
//! back to a default when none is given.
//!
//! ```
//! use employee::Employee;
//!
//! let ada = Employee::new("Ada", Some(5000));
//! assert_eq!(ada.greet_employee(None), "Hello Ada");
//! assert_eq!(ada.greet_employee(Some("Hi")), "Hi Ada");
//! ```

pub mod arguments;
mod employee;

pub use crate::employee::{Employee, DEFAULT_GREETING};
