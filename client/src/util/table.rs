//! Sorting and filtering helpers shared by the list pages.
//!
//! DESIGN
//! ======
//! Lists are small and fetched wholesale, so every render re-derives the
//! visible rows from the full list: filter, then stable sort by the active
//! column.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort column and direction for a table keyed by `K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new(key: K) -> Self {
        Self { key, direction: SortDirection::Asc }
    }

    /// Header click: the active ascending column flips to descending, anything
    /// else becomes the ascending active column.
    pub fn toggle(&mut self, key: K) {
        self.direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = key;
    }

    /// Header marker for column `key`.
    pub fn indicator(&self, key: K) -> &'static str {
        match (self.key == key, self.direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => " ▲",
            (true, SortDirection::Desc) => " ▼",
        }
    }
}

/// Stable sort of `rows` by the active column.
pub fn sort_rows<T, K, F>(rows: &mut [T], sort: SortState<K>, compare: F)
where
    K: Copy,
    F: Fn(&T, &T, K) -> Ordering,
{
    rows.sort_by(|a, b| sort.direction.apply(compare(a, b, sort.key)));
}

/// Case-insensitive substring match; an empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Total order over floats for table columns (NaN sorts last).
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
