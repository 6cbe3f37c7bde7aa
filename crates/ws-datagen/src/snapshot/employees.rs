use ws_core::model::{Employee, EmployeeFilter, EmployeePage, EmployeeStatus};

use super::paginate;
use crate::constants::{EMPLOYEE_COUNT, EMPLOYEE_LIMIT_DEFAULT, EMPLOYEE_LIMIT_MAX, effective_limit};
use crate::random::RandomSource;

pub const DEPARTMENTS: [&str; 6] = [
    "Engineering",
    "Sales",
    "Marketing",
    "HR",
    "Finance",
    "Operations",
];
const ROLES: [&str; 6] = ["Manager", "Senior", "Junior", "Lead", "Associate", "Director"];
const SKILLS: [&str; 6] = [
    "JavaScript",
    "React",
    "Python",
    "Data Analysis",
    "Project Management",
    "Sales",
];
const FIRST_NAMES: [&str; 12] = [
    "Aisha", "Ben", "Chloe", "Dev", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jonas", "Kavya",
    "Liam",
];
const LAST_NAMES: [&str; 10] = [
    "Patel", "Okafor", "Nguyen", "Schmidt", "Rossi", "Kim", "Silva", "Haddad", "Larsen", "Mehta",
];

fn pick<'a>(table: &[&'a str], rng: &mut dyn RandomSource) -> &'a str {
    table[rng.index(table.len())]
}

fn build_employee(id: u32, rng: &mut dyn RandomSource) -> Employee {
    let first = pick(&FIRST_NAMES, rng);
    let last = pick(&LAST_NAMES, rng);

    let mut skills: Vec<String> = Vec::new();
    let wanted = rng.int_range(1, 3) as usize;
    while skills.len() < wanted {
        let skill = pick(&SKILLS, rng);
        if !skills.iter().any(|s| s == skill) {
            skills.push(skill.to_string());
        }
    }

    Employee {
        id,
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}{id}@synergy.example",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        department: pick(&DEPARTMENTS, rng).to_string(),
        role: pick(&ROLES, rng).to_string(),
        status: EmployeeStatus::ALL[rng.index(EmployeeStatus::ALL.len())],
        location: if rng.chance(0.3) {
            "Remote".to_string()
        } else {
            format!("Floor {}", rng.int_range(1, 5))
        },
        desk_assignment: if rng.chance(0.7) {
            format!("Desk {}", rng.int_range(1, 100))
        } else {
            "Hot Desk".to_string()
        },
        hours_today: rng.uniform(0.0, 8.0),
        hours_week: rng.uniform(0.0, 40.0),
        productivity: rng.uniform(60.0, 100.0),
        skills,
        projects: rng.int_range(1, 5) as u32,
        rating: 3.0 + 2.0 * rng.next_unit(),
    }
}

/// The full roster with ids `1..=150`.
pub fn build_employees(rng: &mut dyn RandomSource) -> Vec<Employee> {
    (1..=EMPLOYEE_COUNT).map(|id| build_employee(id, rng)).collect()
}

/// Filter and truncate a roster. `total` counts every match.
pub fn employee_page(employees: &[Employee], filter: &EmployeeFilter) -> EmployeePage {
    let limit = effective_limit(filter.limit, EMPLOYEE_LIMIT_DEFAULT, EMPLOYEE_LIMIT_MAX);
    let (employees, total) = paginate(employees.iter().cloned(), |e| filter.matches(e), limit);
    EmployeePage { employees, total }
}
