//! Employee and space rosters kept between calls.
//!
//! A roster is `None` until a fetch (or the first mutation) fills it, so an
//! emptied roster stays empty instead of being generated again. Conflict
//! resolutions are keyed by space id and belong to the current space roster.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ws_core::classify::EnvironmentLimits;
use ws_core::model::{
    Employee, EmployeeStatus, EmployeeUpdate, NewEmployee, NewSpace, Space, SpaceConflict,
};
use ws_datagen::Generator;
use ws_datagen::catalog::detect_conflicts;

use crate::error::{RuntimeResult, not_found, validation};

fn require(missing: Vec<&'static str>) -> RuntimeResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Rosters {
    employees: Option<Vec<Employee>>,
    spaces: Option<Vec<Space>>,
    resolutions: BTreeMap<u32, String>,
}

impl Rosters {
    pub fn replace_employees(&mut self, employees: Vec<Employee>) {
        self.employees = Some(employees);
    }

    /// A new space roster invalidates every recorded resolution.
    pub fn replace_spaces(&mut self, spaces: Vec<Space>) {
        self.spaces = Some(spaces);
        self.resolutions.clear();
    }

    fn employees(&mut self, g: &mut Generator) -> &mut Vec<Employee> {
        self.employees.get_or_insert_with(|| g.employees())
    }

    fn spaces(&mut self, g: &mut Generator) -> &mut Vec<Space> {
        self.spaces.get_or_insert_with(|| g.spaces())
    }

    pub fn add_employee(&mut self, form: NewEmployee, g: &mut Generator) -> RuntimeResult<Employee> {
        require(form.missing_fields())?;
        let roster = self.employees(g);
        let id = roster.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let employee = Employee {
            id,
            name: form.name,
            email: form.email,
            department: form.department,
            role: if form.role.trim().is_empty() {
                "Employee".to_string()
            } else {
                form.role
            },
            status: EmployeeStatus::Active,
            location: "Office".to_string(),
            desk_assignment: "Unassigned".to_string(),
            hours_today: 0.0,
            hours_week: 0.0,
            productivity: 0.0,
            skills: Vec::new(),
            projects: 0,
            rating: 0.0,
        };
        roster.push(employee.clone());
        Ok(employee)
    }

    pub fn update_employee(
        &mut self,
        id: u32,
        update: EmployeeUpdate,
        g: &mut Generator,
    ) -> RuntimeResult<Employee> {
        let employee = self
            .employees(g)
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(format!("employee {id} not found")))?;
        update.apply(employee);
        Ok(employee.clone())
    }

    pub fn delete_employee(&mut self, id: u32, g: &mut Generator) -> RuntimeResult<Employee> {
        let roster = self.employees(g);
        let pos = roster
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(format!("employee {id} not found")))?;
        Ok(roster.remove(pos))
    }

    pub fn add_space(&mut self, form: NewSpace, g: &mut Generator) -> RuntimeResult<Space> {
        require(form.missing_fields())?;
        let Some(kind) = form.kind else {
            return Err(validation("missing required fields: kind"));
        };
        let roster = self.spaces(g);
        let id = roster.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let space = Space::vacant(id, form.name, kind, form.floor.unwrap_or(1), form.capacity);
        roster.push(space.clone());
        Ok(space)
    }

    /// Conflicts of the retained space roster with recorded resolutions
    /// applied, highest severity first.
    pub fn conflicts(&mut self, g: &mut Generator, now: DateTime<Utc>) -> Vec<SpaceConflict> {
        let mut conflicts = detect_conflicts(self.spaces(g), &EnvironmentLimits::STANDARD, now);
        for conflict in &mut conflicts {
            if let Some(note) = self.resolutions.get(&conflict.space_id) {
                conflict.resolve(note.clone());
            }
        }
        conflicts
    }

    /// Mark the conflict of `space_id` resolved. Resolving again replaces
    /// the note.
    pub fn resolve_conflict(
        &mut self,
        space_id: u32,
        note: Option<String>,
        g: &mut Generator,
        now: DateTime<Utc>,
    ) -> RuntimeResult<SpaceConflict> {
        let note = note
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| SpaceConflict::DEFAULT_RESOLUTION.to_string());
        let mut conflict = self
            .conflicts(g, now)
            .into_iter()
            .find(|c| c.space_id == space_id)
            .ok_or_else(|| not_found(format!("no conflict recorded for space {space_id}")))?;
        conflict.resolve(note.clone());
        self.resolutions.insert(space_id, note);
        Ok(conflict)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ws_core::model::SpaceKind;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap()
    }

    fn generator() -> Generator {
        Generator::from_seed(Some(7))
    }

    #[test]
    fn emptied_roster_stays_empty() {
        let mut g = generator();
        let mut rosters = Rosters::default();
        rosters.replace_employees(Vec::new());
        assert!(rosters.delete_employee(1, &mut g).is_err());

        let added = rosters
            .add_employee(
                NewEmployee {
                    name: "Ada".into(),
                    email: "ada@synergy.example".into(),
                    department: "Engineering".into(),
                    role: String::new(),
                },
                &mut g,
            )
            .unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(added.role, "Employee");
    }

    #[test]
    fn first_mutation_seeds_the_roster() {
        let mut g = generator();
        let mut rosters = Rosters::default();
        let removed = rosters.delete_employee(150, &mut g).unwrap();
        assert_eq!(removed.id, 150);
        assert!(rosters.delete_employee(150, &mut g).is_err());
    }

    #[test]
    fn added_space_takes_next_id() {
        let mut g = generator();
        let mut rosters = Rosters::default();
        let space = rosters
            .add_space(
                NewSpace {
                    name: "Focus Room".into(),
                    kind: Some(SpaceKind::MeetingRoom),
                    floor: None,
                    capacity: 8,
                },
                &mut g,
            )
            .unwrap();
        assert_eq!(space.id, 106);
        assert_eq!(space.floor, 1);
        assert_eq!(space.current, 0);
    }

    #[test]
    fn space_form_without_kind_is_rejected() {
        let mut g = generator();
        let mut rosters = Rosters::default();
        let form = NewSpace {
            name: "Focus Room".into(),
            kind: None,
            floor: Some(2),
            capacity: 8,
        };
        assert!(rosters.add_space(form, &mut g).is_err());
        assert!(rosters.spaces.is_none());
    }

    #[test]
    fn resolutions_survive_until_the_roster_is_replaced() {
        let mut g = generator();
        let mut rosters = Rosters::default();
        let open = rosters.conflicts(&mut g, now());
        let target = open.first().expect("seeded roster has conflicts").space_id;

        let resolved = rosters
            .resolve_conflict(target, None, &mut g, now())
            .unwrap();
        assert!(resolved.resolved);
        assert_eq!(resolved.resolution.as_deref(), Some("Manually resolved"));

        let again = rosters.conflicts(&mut g, now());
        let kept = again.iter().find(|c| c.space_id == target).unwrap();
        assert!(kept.resolved);
        assert_eq!(again.iter().filter(|c| c.resolved).count(), 1);

        rosters.replace_spaces(g.spaces());
        assert!(rosters.conflicts(&mut g, now()).iter().all(|c| !c.resolved));
    }

    #[test]
    fn resolving_a_quiet_space_is_not_found() {
        let mut g = generator();
        let mut rosters = Rosters::default();
        let space = rosters
            .add_space(
                NewSpace {
                    name: "Quiet Pod".into(),
                    kind: Some(SpaceKind::Desk),
                    floor: Some(2),
                    capacity: 2,
                },
                &mut g,
            )
            .unwrap();
        assert!(
            rosters
                .resolve_conflict(space.id, Some("checked".into()), &mut g, now())
                .is_err()
        );
    }
}
