//! Property-based tests for window shape guarantees

use pagewin::pagination::{generate_pagination, try_generate_pagination, PageToken, MAX_WINDOW_LEN};
use proptest::prelude::*;

/// Valid `(current_page, total_pages)` pairs, with totals well past the windowing threshold.
fn page_and_total() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=5_000).prop_flat_map(|total| (1..=total, Just(total)))
}

proptest! {
    #[test]
    fn window_never_exceeds_seven_tokens((current, total) in page_and_total()) {
        let window = generate_pagination(current, total);
        prop_assert_eq!(window.len(), total.min(MAX_WINDOW_LEN));
    }

    #[test]
    fn windowed_totals_are_anchored((current, total) in page_and_total()) {
        prop_assume!(total > MAX_WINDOW_LEN);
        let window = generate_pagination(current, total);
        prop_assert_eq!(window.tokens().first(), Some(&PageToken::Page(1)));
        prop_assert_eq!(window.tokens().last(), Some(&PageToken::Page(total)));
    }

    #[test]
    fn pages_increase_and_gaps_hide_something((current, total) in page_and_total()) {
        let window = generate_pagination(current, total);
        let tokens = window.tokens();

        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()), "adjacent ellipsis");
        }

        let pages = window.pages();
        for pair in pages.windows(2) {
            prop_assert!(pair[0] < pair[1], "pages not strictly increasing: {:?}", pages);
        }

        // Every ellipsis sits between two page numbers with at least one page omitted.
        for (i, token) in tokens.iter().enumerate() {
            if token.is_ellipsis() {
                let before = tokens[i - 1].page().unwrap();
                let after = tokens[i + 1].page().unwrap();
                prop_assert!(after - before >= 2, "empty gap between {} and {}", before, after);
            }
        }

        prop_assert!(pages.iter().all(|page| (1..=total).contains(page)));
    }

    #[test]
    fn current_page_is_always_shown((current, total) in page_and_total()) {
        prop_assert!(generate_pagination(current, total).contains_page(current));
    }

    #[test]
    fn checked_and_unchecked_agree_in_range((current, total) in page_and_total()) {
        prop_assert_eq!(
            try_generate_pagination(current, total).unwrap(),
            generate_pagination(current, total)
        );
    }

    #[test]
    fn checked_rejects_pages_past_the_end(total in 0usize..10_000, excess in 1usize..100) {
        prop_assert!(try_generate_pagination(total + excess, total).is_err());
    }
}
