use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which dashboard a user logs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Employer,
    Executive,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Executive => "executive",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employer" => Ok(Self::Employer),
            "executive" => Ok(Self::Executive),
            other => Err(format!("unknown user type {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
    pub department: String,
    pub join_date: String,
    pub location: String,
    pub employee_id: String,
    pub permissions: Vec<String>,
}

impl UserRecord {
    /// The fixed profile every login of `user_type` receives.
    pub fn mock(user_type: UserType, email: &str) -> Self {
        let (name, role, department, employee_id, permissions): (_, _, _, _, &[&str]) =
            match user_type {
                UserType::Employer => (
                    "Sarah Johnson",
                    "HR Manager",
                    "Human Resources",
                    "HR001",
                    &["manage_employees", "view_analytics", "space_allocation"],
                ),
                UserType::Executive => (
                    "Michael Chen",
                    "Chief Executive Officer",
                    "Executive Office",
                    "EXE001",
                    &["full_access", "executive_dashboard", "strategic_overview"],
                ),
            };
        Self {
            id: "1".into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            company: "Synergy Workplace".into(),
            department: department.into(),
            join_date: "2022-03-15".into(),
            location: "Mumbai, India".into(),
            employee_id: employee_id.into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserRecord,
    pub user_type: UserType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_profiles_differ_by_type() {
        let hr = UserRecord::mock(UserType::Employer, "a@b.c");
        let ceo = UserRecord::mock(UserType::Executive, "a@b.c");
        assert_eq!(hr.employee_id, "HR001");
        assert_eq!(ceo.employee_id, "EXE001");
        assert!(ceo.permissions.contains(&"full_access".to_string()));
        assert_eq!(hr.email, "a@b.c");
    }

    #[test]
    fn user_type_serializes_lowercase() {
        let json = serde_json::to_string(&UserType::Executive).unwrap();
        assert_eq!(json, "\"executive\"");
        assert_eq!("EMPLOYER".parse::<UserType>().unwrap(), UserType::Employer);
    }
}
