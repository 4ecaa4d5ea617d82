use std::cmp::Ordering;

/// Pure in-memory table operations shared by the deployments, projects and
/// repository views. Always applied in the same order: filter, then sort,
/// then paginate; each is deterministic over its inputs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A comparable cell value extracted from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    Bool(bool),
    None,
}

/// Three-way comparison: text sorts case-insensitively, numbers numerically,
/// booleans false-before-true. Any other pairing compares equal, so a column
/// with mixed value kinds never reorders rows.
pub fn compare(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Case-insensitive substring filter. A row survives when any of its search
/// fields contains the term; an empty term keeps everything.
pub fn filter<T, F>(rows: &[T], term: &str, search_fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<String>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            search_fields(row)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by a single column.
pub fn sort<T, F>(rows: &mut [T], key: F, direction: SortDirection)
where
    F: Fn(&T) -> SortValue,
{
    rows.sort_by(|a, b| {
        let ordering = compare(&key(a), &key(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// One page of rows plus the totals the pager renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// 1-based page slicing. A page past the end yields an empty slice, not an
/// error; `total_pages` is `ceil(total / page_size)`.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_rows = rows.len();
    if page_size == 0 {
        return Page { rows: Vec::new(), page, total_pages: 0, total_rows };
    }

    let total_pages = total_rows.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let slice = if page == 0 || start >= total_rows {
        Vec::new()
    } else {
        rows[start..(start + page_size).min(total_rows)].to_vec()
    };

    Page { rows: slice, page, total_pages, total_rows }
}
