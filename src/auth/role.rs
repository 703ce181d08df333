use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Staff role on the login roster. Closed set; hierarchy is
/// admin > sales > cashier by capability, not by comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Sales,
    Cashier,
}

impl Role {
    /// Downward-inclusive capability table. Adding a tier means adding a row
    /// here, not another branch in the access check.
    pub fn grants(self) -> &'static [Role] {
        match self {
            Role::Admin => &[Role::Admin, Role::Sales, Role::Cashier],
            Role::Sales => &[Role::Sales, Role::Cashier],
            Role::Cashier => &[Role::Cashier],
        }
    }

    /// True when this role meets or exceeds the required tier.
    pub fn satisfies(self, required: Role) -> bool {
        self.grants().contains(&required)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Sales => "sales",
            Role::Cashier => "cashier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is exact and case-sensitive; feature gates pass the minimum role
/// they need as a plain string, and an unrecognized requirement must not be
/// satisfiable by any principal.
impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "sales" => Ok(Role::Sales),
            "cashier" => Ok(Role::Cashier),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_are_downward_inclusive() {
        assert!(Role::Admin.satisfies(Role::Admin));
        assert!(Role::Admin.satisfies(Role::Sales));
        assert!(Role::Admin.satisfies(Role::Cashier));

        assert!(!Role::Sales.satisfies(Role::Admin));
        assert!(Role::Sales.satisfies(Role::Sales));
        assert!(Role::Sales.satisfies(Role::Cashier));

        assert!(!Role::Cashier.satisfies(Role::Admin));
        assert!(!Role::Cashier.satisfies(Role::Sales));
        assert!(Role::Cashier.satisfies(Role::Cashier));
    }

    #[test]
    fn parse_is_case_sensitive_and_closed() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("sales".parse::<Role>(), Ok(Role::Sales));
        assert_eq!("cashier".parse::<Role>(), Ok(Role::Cashier));
        assert!("Admin".parse::<Role>().is_err());
        assert!("CASHIER".parse::<Role>().is_err());
        assert!("manager".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Sales).unwrap(), "\"sales\"");
        let r: Role = serde_json::from_str("\"cashier\"").unwrap();
        assert_eq!(r, Role::Cashier);
    }
}
