//! User roles.
//!
//! Roles form a closed set and are immutable after registration: there is no
//! role-change operation anywhere in the system. A role is encoded into the
//! session token at login and only refreshed by logging in again.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

/// Error returned when parsing a string that names no known role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Stable lowercase name, matching the database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    /// The dashboard a freshly authenticated user of this role lands on.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Patient => "/patient/dashboard",
            Role::Doctor => "/doctor/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("patient".parse::<Role>().unwrap(), Role::Patient);
        assert_eq!("doctor".parse::<Role>().unwrap(), Role::Doctor);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "nurse".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("nurse".to_string()));
    }

    #[test]
    fn test_roundtrip_through_str() {
        for role in [Role::Patient, Role::Doctor, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Role::Doctor).unwrap();
        assert_eq!(json, "\"doctor\"");
        let back: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, Role::Admin);
    }
}
