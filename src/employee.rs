use serde::{Deserialize, Serialize};

/// Greeting used when the caller does not supply one.
pub const DEFAULT_GREETING: &str = "Hello";

/// Named employee with an optional salary.
///
/// Fields are set once in [`Employee::new`] and never change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    #[serde(default)]
    salary: Option<i32>,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: Option<i32>) -> Employee {
        Employee {
            name: name.into(),
            salary,
        }
    }

    /// Greets the employee by name.
    ///
    /// `None` is replaced by [`DEFAULT_GREETING`]. Any provided greeting is
    /// used as is, so `Some("")` yields a leading space.
    ///
    /// ```
    /// use employee::Employee;
    ///
    /// let grace = Employee::new("Grace", None);
    /// assert_eq!(grace.greet_employee(Some("Welcome")), "Welcome Grace");
    /// assert_eq!(grace.greet_employee(Some("")), " Grace");
    /// ```
    pub fn greet_employee(&self, greeting: Option<&str>) -> String {
        let greeting = greeting.unwrap_or(DEFAULT_GREETING);
        format!("{greeting} {}", self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> Option<i32> {
        self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_name_and_salary() {
        let ada = Employee::new("Ada", Some(5000));
        assert_eq!(ada.name(), "Ada");
        assert_eq!(ada.salary(), Some(5000));
    }

    #[test]
    fn accepts_empty_name_and_missing_salary() {
        let nobody = Employee::new("", None);
        assert_eq!(nobody.name(), "");
        assert_eq!(nobody.salary(), None);
        assert_eq!(nobody.greet_employee(None), "Hello ");
    }

    #[test]
    fn default_greeting() {
        let ada = Employee::new("Ada", Some(5000));
        assert_eq!(ada.greet_employee(None), "Hello Ada");
    }

    #[test]
    fn custom_greeting() {
        let ada = Employee::new("Ada", Some(5000));
        assert_eq!(ada.greet_employee(Some("Hi")), "Hi Ada");
    }

    #[test]
    fn empty_greeting_is_not_replaced() {
        let ada = Employee::new("Ada", None);
        assert_eq!(ada.greet_employee(Some("")), " Ada");
    }

    #[test]
    fn greeting_is_deterministic() {
        let grace = Employee::new("Grace", None);
        let first = grace.greet_employee(Some("Welcome"));
        let second = grace.greet_employee(Some("Welcome"));
        assert_eq!(first, second);
        assert_eq!(grace.greet_employee(None), grace.greet_employee(None));
    }
}
