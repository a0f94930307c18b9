//! Property-based tests for line framing.
//!
//! TCP may deliver a stream in any partition of reads. These tests generate a
//! stream of protocol lines, cut it at arbitrary points, and verify the framer
//! yields exactly the lines it would yield for the unsplit stream.

use ircc_proto::{LineFramer, framer::MAX_RESIDUAL};
use proptest::prelude::*;

/// Printable protocol-ish line without terminators.
fn arbitrary_line() -> impl Strategy<Value = String> {
    "[ -~]{1,80}"
}

/// Lines straddling the residual limit, each with its terminator.
fn boundary_line() -> impl Strategy<Value = Vec<u8>> {
    (MAX_RESIDUAL - 2..=MAX_RESIDUAL + 2, any::<bool>()).prop_map(|(len, crlf)| {
        let mut line = vec![b'x'; len];
        line.extend_from_slice(if crlf { b"\r\n" } else { b"\n" });
        line
    })
}

fn frame_all(chunks: &[&[u8]]) -> Vec<String> {
    let mut framer = LineFramer::new();
    let mut lines = Vec::new();
    for chunk in chunks {
        framer.push(chunk);
        lines.extend(framer.lines());
    }
    lines
}

proptest! {
    #[test]
    fn prop_split_invariance(
        lines in prop::collection::vec(arbitrary_line(), 1..20),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let stream: Vec<u8> = lines.iter().flat_map(|l| format!("{l}\r\n").into_bytes()).collect();

        let mut points: Vec<usize> = cuts.iter().map(|i| i.index(stream.len())).collect();
        points.sort_unstable();
        points.dedup();

        let mut chunks: Vec<&[u8]> = Vec::new();
        let mut start = 0;
        for point in points {
            chunks.push(&stream[start..point]);
            start = point;
        }
        chunks.push(&stream[start..]);

        let whole = frame_all(&[&stream]);
        let split = frame_all(&chunks);

        prop_assert_eq!(&whole, &split);
        prop_assert_eq!(whole, lines);
    }

    #[test]
    fn prop_byte_at_a_time(lines in prop::collection::vec(arbitrary_line(), 1..10)) {
        let stream: Vec<u8> = lines.iter().flat_map(|l| format!("{l}\n").into_bytes()).collect();
        let chunks: Vec<&[u8]> = stream.chunks(1).collect();

        prop_assert_eq!(frame_all(&chunks), lines);
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 0..16),
    ) {
        let mut framer = LineFramer::new();
        for chunk in &chunks {
            framer.push(chunk);
            for line in framer.lines() {
                prop_assert!(!line.contains('\n'));
                prop_assert!(!line.is_empty());
            }
        }
    }

    #[test]
    fn prop_split_invariance_at_residual_limit(
        lines in prop::collection::vec(
            prop_oneof![boundary_line(), arbitrary_line().prop_map(|l| format!("{l}\n").into_bytes())],
            1..6,
        ),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let stream: Vec<u8> = lines.concat();

        let mut points: Vec<usize> = cuts.iter().map(|i| i.index(stream.len())).collect();
        points.sort_unstable();
        points.dedup();

        let mut framer = LineFramer::new();
        let mut split = Vec::new();
        let mut start = 0;
        for point in points.into_iter().chain([stream.len()]) {
            framer.push(&stream[start..point]);
            split.extend(framer.lines());
            prop_assert!(framer.residual().len() <= MAX_RESIDUAL);
            start = point;
        }

        let mut whole_framer = LineFramer::new();
        whole_framer.push(&stream);
        let whole: Vec<String> = whole_framer.lines().collect();

        // Bytes before `\n` decide whether a line is kept.
        let kept = lines.iter().filter(|l| l.len() - 1 <= MAX_RESIDUAL).count();
        let dropped = (lines.len() - kept) as u64;

        prop_assert_eq!(&whole, &split);
        prop_assert_eq!(whole.len(), kept);
        prop_assert_eq!(whole_framer.overflowed(), dropped);
        prop_assert_eq!(framer.overflowed(), dropped);
    }
}
