use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    ClassRep,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::ClassRep => "class_rep",
        }
    }

    /// Human readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Regular Student",
            Role::ClassRep => "Class Representative",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "class_rep" => Ok(Role::ClassRep),
            other => Err(AppError::BadRequest(format!("Unknown role: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Admin,
    Student,
}

impl AccountType {
    pub fn login_route(&self) -> &'static str {
        match self {
            AccountType::Admin => "/admin/login",
            AccountType::Student => "/student/login",
        }
    }
}

impl FromStr for AccountType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AccountType::Admin),
            "student" => Ok(AccountType::Student),
            other => Err(AppError::BadRequest(format!("Unknown account type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub username: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub role: Role,
}

/// Password is only ever sent, never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudentRequest {
    pub name: String,
    pub class_name: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}
