//! Property-based tests for the display buffer.

use ircc_app::{DisplayBuffer, Line, LineKind, buffer::MAX_LINE_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn wrap_round_trips(text in "\\PC{1,600}", width in 1usize..120) {
        let mut buf = DisplayBuffer::new();
        let produced = buf.append(&text, width, LineKind::Generic);

        let chars = text.chars().count();
        prop_assert_eq!(produced, chars.div_ceil(width));
        prop_assert!(buf.lines().all(|l| l.text.chars().count() <= width));

        let joined: String = buf.lines().map(|l| l.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn never_exceeds_capacity(
        capacity in 1usize..50,
        texts in prop::collection::vec("[a-z]{0,40}", 0..100),
        width in 1usize..20,
    ) {
        let mut buf = DisplayBuffer::with_capacity(capacity);
        let mut appended = 0u64;
        for text in &texts {
            appended += buf.append(text, width, LineKind::Generic) as u64;
            prop_assert!(buf.len() <= capacity);
        }
        prop_assert_eq!(buf.len() as u64 + buf.evicted(), appended);
    }

    #[test]
    fn oversized_width_is_capped(text in "[a-z]{301,700}") {
        let mut buf = DisplayBuffer::new();
        buf.append(&text, usize::MAX, LineKind::Generic);

        prop_assert!(buf.lines().all(|l| l.text.chars().count() <= MAX_LINE_LEN));
    }

    #[test]
    fn viewport_is_stable_without_mutation(
        texts in prop::collection::vec("[a-z]{0,30}", 1..40),
        height in 0usize..30,
        scroll in 0usize..40,
    ) {
        let mut buf = DisplayBuffer::new();
        for text in &texts {
            buf.append(text, 7, LineKind::Generic);
        }
        buf.scroll_up(scroll, height);

        let first: Vec<Line> = buf.viewport(height).cloned().collect();
        let second: Vec<Line> = buf.viewport(height).cloned().collect();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= height);
    }
}
