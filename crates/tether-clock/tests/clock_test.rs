//! Ordering, advancement, and merge behavior of the logical clock.

use tether_clock::{merge, LogicalClock};

fn t(raw: u32) -> LogicalClock {
    LogicalClock::from_raw(raw)
}

#[test]
fn distant_past_is_zero() {
    assert_eq!(LogicalClock::DISTANT_PAST.raw(), 0);
    assert_eq!(LogicalClock::default(), LogicalClock::DISTANT_PAST);
    assert!(LogicalClock::DISTANT_PAST.is_valid());
}

#[test]
fn invalid_is_reserved() {
    assert!(!LogicalClock::INVALID.is_valid());
    assert_ne!(LogicalClock::INVALID, LogicalClock::DISTANT_PAST);
}

#[test]
fn successor_adds_one() {
    assert_eq!(t(0).successor(), t(1));
    assert_eq!(t(41).successor(), t(42));
    assert!(LogicalClock::DISTANT_PAST <= LogicalClock::DISTANT_PAST.successor());
}

#[test]
fn last_valid_successor_is_still_valid() {
    let last = t(u32::MAX - 2).successor();
    assert_eq!(last, t(u32::MAX - 1));
    assert!(last.is_valid());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "range exhausted")]
fn exhausting_the_range_is_caught_in_debug() {
    let _ = t(u32::MAX - 1).successor();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invalid logical clock")]
fn advancing_the_placeholder_is_caught_in_debug() {
    let _ = LogicalClock::INVALID.successor();
}

#[test]
fn comparisons_follow_counter() {
    assert!(t(1) < t(2));
    assert!(t(2) > t(1));
    assert!(t(2) >= t(2));
    assert!(t(2) <= t(2));
    assert!(t(3) != t(4));
    assert!(t(4) == t(4));
}

#[test]
fn independent_advances_tie_and_merge_does_not_advance() {
    let start = LogicalClock::DISTANT_PAST;
    let node_a = start.successor();
    let node_b = start.successor();

    assert_eq!(node_a, t(1));
    assert_eq!(node_b, t(1));
    assert_eq!(merge(node_a, node_b), t(1));
    assert_eq!(merge(node_a, node_b).successor(), t(2));
}

#[test]
fn merge_picks_later() {
    assert_eq!(merge(t(3), t(9)), t(9));
    assert_eq!(merge(t(9), t(3)), t(9));
    assert_eq!(t(5).merge(t(5)), t(5));
}

#[test]
fn fold_latest_of_nothing_is_distant_past() {
    assert_eq!(
        LogicalClock::fold_latest(std::iter::empty()),
        LogicalClock::DISTANT_PAST
    );
}

#[test]
fn fold_latest_finds_latest_in_caller_order() {
    let seen = [t(4), t(11), t(2), t(11), t(7)];
    assert_eq!(LogicalClock::fold_latest(seen), t(11));
}

#[test]
fn advance_past_moves_beyond_observed() {
    let mut local = t(3);
    assert_eq!(local.advance_past(t(10)), t(11));
    assert_eq!(local, t(11));

    // An older observation still ticks the local clock.
    assert_eq!(local.advance_past(t(2)), t(12));
}

#[test]
fn advance_past_from_placeholder_starts_at_distant_past() {
    let mut local = LogicalClock::INVALID;
    assert_eq!(local.advance_past(t(7)), t(8));
    assert_eq!(local, t(8));

    let mut fresh = LogicalClock::INVALID;
    assert_eq!(fresh.advance_past(LogicalClock::DISTANT_PAST), t(1));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "merge of the invalid logical clock")]
fn merging_the_placeholder_is_caught_in_debug() {
    let _ = merge(t(5), LogicalClock::INVALID);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "merge of the invalid logical clock")]
fn merging_into_the_placeholder_is_caught_in_debug() {
    let _ = LogicalClock::INVALID.merge(t(5));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "merge of the invalid logical clock")]
fn fold_latest_over_the_placeholder_is_caught_in_debug() {
    let _ = LogicalClock::fold_latest([t(5), LogicalClock::INVALID, t(9)]);
}

#[test]
fn display_names_placeholder() {
    assert_eq!(t(12).to_string(), "t12");
    assert_eq!(LogicalClock::INVALID.to_string(), "t(invalid)");
}

#[test]
fn serde_carries_bare_counter() {
    let json = serde_json::to_string(&t(77)).unwrap();
    assert_eq!(json, "77");
    let back: LogicalClock = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t(77));
}
