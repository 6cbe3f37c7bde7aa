use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Remote,
    OnLeave,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 4] = [Self::Active, Self::Inactive, Self::Remote, Self::OnLeave];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Remote => "remote",
            Self::OnLeave => "on_leave",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s.trim())
            .ok_or_else(|| format!("unknown employee status {s:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub status: EmployeeStatus,
    pub location: String,
    /// Free-text label such as `"Desk 42"` or `"Hot Desk"`; not a space id.
    pub desk_assignment: String,
    /// `[0, 8]`.
    pub hours_today: f64,
    /// `[0, 40]`.
    pub hours_week: f64,
    /// `[0, 100]`.
    pub productivity: f64,
    pub skills: Vec<String>,
    pub projects: u32,
    pub rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring of name, email or department.
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub limit: Option<usize>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(dept) = &self.department
            && !employee.department.eq_ignore_ascii_case(dept)
        {
            return false;
        }
        if let Some(status) = self.status
            && employee.status != status
        {
            return false;
        }
        match &self.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                employee.name.to_lowercase().contains(&needle)
                    || employee.email.to_lowercase().contains(&needle)
                    || employee.department.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    /// Matches before `limit` was applied.
    pub total: usize,
}

/// Payload of the add-employee form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl NewEmployee {
    /// Names of required fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.department.trim().is_empty() {
            missing.push("department");
        }
        missing
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub location: Option<String>,
    pub desk_assignment: Option<String>,
}

impl EmployeeUpdate {
    pub fn apply(self, employee: &mut Employee) {
        if let Some(v) = self.name {
            employee.name = v;
        }
        if let Some(v) = self.email {
            employee.email = v;
        }
        if let Some(v) = self.department {
            employee.department = v;
        }
        if let Some(v) = self.role {
            employee.role = v;
        }
        if let Some(v) = self.status {
            employee.status = v;
        }
        if let Some(v) = self.location {
            employee.location = v;
        }
        if let Some(v) = self.desk_assignment {
            employee.desk_assignment = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 7,
            name: "Employee 7".into(),
            email: "employee7@example.com".into(),
            department: "Engineering".into(),
            role: "Lead".into(),
            status: EmployeeStatus::Remote,
            location: "Remote".into(),
            desk_assignment: "Hot Desk".into(),
            hours_today: 4.0,
            hours_week: 20.0,
            productivity: 80.0,
            skills: vec!["Rust".into()],
            projects: 2,
            rating: 4.2,
        }
    }

    #[test]
    fn filter_by_search_is_case_insensitive() {
        let filter = EmployeeFilter {
            search: Some("ENGINEER".into()),
            ..Default::default()
        };
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn filter_by_status_and_department() {
        let e = sample();
        let mut filter = EmployeeFilter {
            department: Some("engineering".into()),
            status: Some(EmployeeStatus::Remote),
            ..Default::default()
        };
        assert!(filter.matches(&e));
        filter.status = Some(EmployeeStatus::Active);
        assert!(!filter.matches(&e));
    }

    #[test]
    fn update_touches_only_given_fields() {
        let mut e = sample();
        EmployeeUpdate {
            role: Some("Director".into()),
            status: Some(EmployeeStatus::Active),
            ..Default::default()
        }
        .apply(&mut e);
        assert_eq!(e.role, "Director");
        assert_eq!(e.status, EmployeeStatus::Active);
        assert_eq!(e.name, "Employee 7");
    }

    #[test]
    fn missing_fields_are_reported() {
        let form = NewEmployee {
            name: "Ada".into(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), ["email", "department"]);
    }

    #[test]
    fn status_parses_snake_case() {
        assert_eq!(
            "on_leave".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::OnLeave
        );
        assert!("retired".parse::<EmployeeStatus>().is_err());
    }
}
