//! Row selection and client-side sorting for tables.

use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// State of the "select all" box, computed over selectable rows only.
pub fn header_check_state(selectable_ids: &[String], selected: &HashSet<String>) -> HeaderCheckState {
    if selectable_ids.is_empty() {
        return HeaderCheckState::Unchecked;
    }
    let picked = selectable_ids.iter().filter(|id| selected.contains(*id)).count();
    if picked == 0 {
        HeaderCheckState::Unchecked
    } else if picked == selectable_ids.len() {
        HeaderCheckState::Checked
    } else {
        HeaderCheckState::Indeterminate
    }
}

/// Checks or clears every selectable row of the current page.
pub fn set_all(selectable_ids: &[String], selected: &mut HashSet<String>, check: bool) {
    for id in selectable_ids {
        if check {
            selected.insert(id.clone());
        } else {
            selected.remove(id);
        }
    }
}

pub fn set_one(selected: &mut HashSet<String>, id: String, check: bool) {
    if check {
        selected.insert(id);
    } else {
        selected.remove(&id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<&'static str>,
    pub ascending: bool,
}

impl SortState {
    /// Same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field);
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        match self.field {
            Some(f) if f == field && self.ascending => " ▲",
            Some(f) if f == field => " ▼",
            _ => "",
        }
    }

    pub fn apply<T>(&self, rows: &mut [T], compare: impl Fn(&T, &T) -> Ordering) {
        if self.field.is_none() {
            return;
        }
        rows.sort_by(|a, b| {
            let cmp = compare(a, b);
            if self.ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_state_ignores_unselectable_rows() {
        let selectable = ids(&["1", "2"]);
        let mut selected = HashSet::new();
        assert_eq!(header_check_state(&selectable, &selected), HeaderCheckState::Unchecked);

        selected.insert("1".to_string());
        assert_eq!(header_check_state(&selectable, &selected), HeaderCheckState::Indeterminate);

        selected.insert("2".to_string());
        assert_eq!(header_check_state(&selectable, &selected), HeaderCheckState::Checked);
    }

    #[test]
    fn nothing_selectable_is_unchecked() {
        let selected: HashSet<String> = ids(&["9"]).into_iter().collect();
        assert_eq!(header_check_state(&[], &selected), HeaderCheckState::Unchecked);
    }

    #[test]
    fn select_all_touches_only_given_rows() {
        let mut selected: HashSet<String> = ids(&["other"]).into_iter().collect();
        set_all(&ids(&["1", "2"]), &mut selected, true);
        assert_eq!(selected.len(), 3);
        set_all(&ids(&["1", "2"]), &mut selected, false);
        assert_eq!(selected, ids(&["other"]).into_iter().collect());
    }

    #[test]
    fn sort_toggles_direction() {
        let mut s = SortState::default();
        let mut rows = vec![3, 1, 2];
        s.apply(&mut rows, |a, b| a.cmp(b));
        assert_eq!(rows, vec![3, 1, 2]);

        s.toggle("n");
        s.apply(&mut rows, |a, b| a.cmp(b));
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(s.indicator("n"), " ▲");

        s.toggle("n");
        s.apply(&mut rows, |a, b| a.cmp(b));
        assert_eq!(rows, vec![3, 2, 1]);
        assert_eq!(s.indicator("n"), " ▼");
        assert_eq!(s.indicator("other"), "");
    }
}
