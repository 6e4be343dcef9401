//! Query Module
//!
//! Search and pagination over the listing collection.

use crate::models::Property;

// == Search ==
/// Keeps properties whose title, description or location contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn search(records: Vec<Property>, query: Option<&str>) -> Vec<Property> {
    let needle = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return records,
    };

    records.into_iter().filter(|p| p.matches(&needle)).collect()
}

// == Pagination ==
/// One page of results plus navigation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub total_count: usize,
}

/// Slices `items` into the requested page.
///
/// Lenient like a listing page should be: a missing or non-numeric page is
/// page 1, and a page past the end is the last page. An empty collection
/// still has one empty page.
pub fn paginate<T>(items: Vec<T>, page: Option<&str>, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(per_page).max(1);

    let requested = page
        .and_then(|p| p.trim().parse::<usize>().ok())
        .unwrap_or(1);
    let current_page = requested.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((current_page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        current_page,
        total_pages,
        has_previous: current_page > 1,
        has_next: current_page < total_pages,
        total_count,
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;
    use chrono::Utc;

    fn property(id: u64, title: &str, description: &str, location: &str) -> Property {
        Property {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price: Price::from_cents(100),
            location: location.to_string(),
            created_at: Utc::now(),
        }
    }

    fn catalogue() -> Vec<Property> {
        vec![
            property(1, "Garden Flat", "Quiet street", "Westlands"),
            property(2, "Penthouse", "Rooftop GARDEN terrace", "Kilimani"),
            property(3, "Townhouse", "Near the park", "Karen"),
        ]
    }

    #[test]
    fn test_search_blank_keeps_all() {
        assert_eq!(search(catalogue(), None).len(), 3);
        assert_eq!(search(catalogue(), Some("   ")).len(), 3);
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let ids: Vec<u64> = search(catalogue(), Some("garden")).iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2]);

        let ids: Vec<u64> = search(catalogue(), Some("KAREN")).iter().map(|p| p.id).collect();
        assert_eq!(ids, [3]);

        assert!(search(catalogue(), Some("mansion")).is_empty());
    }

    #[test]
    fn test_paginate_first_page() {
        let page = paginate((1..=25).collect::<Vec<u32>>(), None, 10);

        assert_eq!(page.items, (1..=10).collect::<Vec<u32>>());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
        assert!(!page.has_previous);
        assert!(page.has_next);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = paginate((1..=25).collect::<Vec<u32>>(), Some("3"), 10);

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn test_paginate_out_of_range_pages() {
        let items: Vec<u32> = (1..=25).collect();

        assert_eq!(paginate(items.clone(), Some("99"), 10).current_page, 3);
        assert_eq!(paginate(items.clone(), Some("0"), 10).current_page, 1);
        assert_eq!(paginate(items.clone(), Some("abc"), 10).current_page, 1);
        assert_eq!(paginate(items, Some("-2"), 10).current_page, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(Vec::<u32>::new(), Some("4"), 10);

        assert!(page.items.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
        assert!(!page.has_next);
    }
}
