//! Pure search and pagination math for the users view.
//!
//! Everything here is a function of its arguments (no signals, no
//! storage), so the view layer stays wiring-only and these stay testable
//! on their own.

use store::User;

/// Fixed number of records per table page.
pub const PAGE_SIZE: usize = 8;

/// Case-insensitive substring match against `"first last"` or the email.
/// The empty query matches everything.
pub fn matches(user: &User, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    user.full_name().to_lowercase().contains(&query)
        || user.email.to_lowercase().contains(&query)
}

/// Order-preserving subset of `users` matching `query`.
pub fn filter(users: &[User], query: &str) -> Vec<User> {
    users.iter().filter(|u| matches(u, query)).cloned().collect()
}

/// Number of pages `total` records occupy.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

/// Whether a requested page number is inside `[1, page_count]` for the
/// given (filtered) total. Out-of-range requests are no-ops in the view.
pub fn page_in_range(requested: usize, total: usize, per_page: usize) -> bool {
    requested >= 1 && requested <= page_count(total, per_page)
}

/// The 1-indexed `page` window of `items`.
pub fn page_window<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * per_page;
    items.iter().skip(start).take(per_page).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(id: &str, first: &str, last: &str, email: &str) -> User {
        User {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            password: None,
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            avatar_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn roster() -> Vec<User> {
        vec![
            user("1", "Ana", "Ruiz", "ana@x.com"),
            user("2", "Ben", "Okafor", "ben.okafor@work.org"),
            user("3", "Carla", "Benitez", "carla@x.com"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let users = roster();
        assert_eq!(filter(&users, ""), users);
    }

    #[test]
    fn matches_name_and_email_case_insensitively() {
        let users = roster();

        // "ben" hits Ben Okafor by name and Carla Benitez by last name.
        let hits = filter(&users, "BEN");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "2");
        assert_eq!(hits[1].id, "3");

        // Email-only match.
        let hits = filter(&users, "work.org");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        // Crossing the first/last boundary matches the concatenated name.
        let hits = filter(&users, "ana ruiz");
        assert_eq!(hits.len(), 1);

        assert!(filter(&users, "zzz").is_empty());
    }

    #[test]
    fn every_hit_matches_and_every_miss_does_not() {
        let users = roster();
        let query = "a";
        let hits = filter(&users, query);
        for u in &users {
            let hit = hits.iter().any(|h| h.id == u.id);
            let expected = u.full_name().to_lowercase().contains(query)
                || u.email.to_lowercase().contains(query);
            assert_eq!(hit, expected, "record {}", u.id);
        }
    }

    #[test]
    fn page_counts() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(8, PAGE_SIZE), 1);
        assert_eq!(page_count(9, PAGE_SIZE), 2);
        assert_eq!(page_count(24, PAGE_SIZE), 3);
    }

    #[test]
    fn page_window_slices_without_overlap() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(page_window(&items, 1, 8), (0..8).collect::<Vec<_>>());
        assert_eq!(page_window(&items, 2, 8), (8..16).collect::<Vec<_>>());
        assert_eq!(page_window(&items, 3, 8), (16..20).collect::<Vec<_>>());
        assert!(page_window(&items, 4, 8).is_empty());
    }

    #[test]
    fn out_of_range_page_requests_are_rejected() {
        assert!(!page_in_range(0, 20, 8));
        assert!(page_in_range(1, 20, 8));
        assert!(page_in_range(3, 20, 8));
        assert!(!page_in_range(4, 20, 8));
        assert!(!page_in_range(1, 0, 8));
    }

    // Pins the current jump-to-last behavior: the jump target comes from
    // the unfiltered count, so with an active filter the request can land
    // outside the filtered range and must no-op.
    #[test]
    fn last_page_jump_can_be_rejected_while_filtering() {
        let unfiltered_total = 20;
        let filtered_total = 5;
        let jump_target = page_count(unfiltered_total, 8);
        assert_eq!(jump_target, 3);
        assert!(!page_in_range(jump_target, filtered_total, 8));
    }
}
