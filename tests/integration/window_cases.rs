//! Library-level checks of the documented window cases.

use pagewin::pagination::{
    generate_pagination, try_generate_pagination, PageToken, MAX_WINDOW_LEN,
};
use pagewin::pagination::PageToken::{Ellipsis, Page};

#[test]
fn test_short_listings_show_every_page() {
    for total in 1..=7 {
        for current in 1..=total {
            let window = generate_pagination(current, total);
            assert_eq!(window.len(), total);
            assert!(window.iter().all(|token| !token.is_ellipsis()));
            assert_eq!(window.pages(), (1..=total).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_documented_ten_page_windows() {
    let cases: [(usize, Vec<PageToken>); 4] = [
        (1, vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]),
        (3, vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]),
        (8, vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]),
        (5, vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]),
    ];
    for (current, expected) in cases {
        assert_eq!(
            generate_pagination(current, 10).into_inner(),
            expected,
            "current page {}",
            current
        );
    }
}

#[test]
fn test_large_total_keeps_fixed_width() {
    let total = 1_000_000;
    for current in [1, 2, 3, 4, 500_000, total - 3, total - 2, total] {
        let window = generate_pagination(current, total);
        assert_eq!(window.len(), MAX_WINDOW_LEN);
        assert_eq!(window.tokens().first(), Some(&Page(1)));
        assert_eq!(window.tokens().last(), Some(&Page(total)));
        assert!(window.contains_page(current));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    assert_eq!(generate_pagination(42, 100), generate_pagination(42, 100));
}

#[test]
fn test_checked_variant_boundaries() {
    assert!(try_generate_pagination(1, 1).is_ok());
    assert!(try_generate_pagination(10, 10).is_ok());
    assert!(try_generate_pagination(0, 10).is_err());
    assert!(try_generate_pagination(11, 10).is_err());
    assert!(try_generate_pagination(1, 0).is_err());
}

#[test]
fn test_json_matches_number_or_ellipsis_array() {
    let json = serde_json::to_string(&generate_pagination(5, 10)).unwrap();
    assert_eq!(json, r#"[1,"...",4,5,6,"...",10]"#);
}
