use std::collections::BTreeSet;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;

/// Anything that belongs to one employee and can be narrowed by a [`Selection`].
pub trait EmployeeKeyed {
    fn employee_id(&self) -> &str;
}

impl EmployeeKeyed for Employee {
    fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

impl EmployeeKeyed for AttendanceRecord {
    fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

impl<T: EmployeeKeyed + ?Sized> EmployeeKeyed for &T {
    fn employee_id(&self) -> &str {
        (**self).employee_id()
    }
}

/// Multi-select set of employee ids.
///
/// An empty selection means "everyone", not "no one".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn of<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated id list; blank entries are skipped.
    pub fn parse(raw: &str) -> Self {
        Self::of(raw.split(',').map(str::trim).filter(|id| !id.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn includes(&self, employee_id: &str) -> bool {
        self.ids.is_empty() || self.ids.contains(employee_id)
    }

    /// Keeps entries whose employee is selected. Ids with no matching entry
    /// are ignored.
    pub fn apply<T: EmployeeKeyed>(&self, items: Vec<T>) -> Vec<T> {
        if self.ids.is_empty() {
            return items;
        }
        items
            .into_iter()
            .filter(|item| self.includes(item.employee_id()))
            .collect()
    }

    pub fn toggle(&mut self, employee_id: &str) {
        if !self.ids.remove(employee_id) {
            self.ids.insert(employee_id.to_string());
        }
    }

    /// Deselects every id in `ids` if all of them are already selected,
    /// otherwise selects them all.
    pub fn toggle_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ids: Vec<&str> = ids.into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if ids.iter().all(|id| self.ids.contains(*id)) {
            for id in ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(ids.into_iter().map(str::to_string));
        }
    }

}
