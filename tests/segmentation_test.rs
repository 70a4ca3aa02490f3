//! Segmentation and fragment-building properties over whole spans

use annotation_visualizer_wasm::{DocumentText, Offsets, OffsetsList, Span, SpanError};
use rstest::rstest;

fn offsets(ranges: &[(usize, usize)]) -> OffsetsList {
    ranges.iter().map(|&r| r.into()).collect()
}

fn is_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

#[rstest]
#[case::no_break("hello world", &[(0, 5)], &[(0, 5)], &[0])]
#[case::empty_range("hello", &[(2, 2)], &[(2, 2)], &[0])]
#[case::one_break("ab\ncd", &[(0, 5)], &[(0, 2), (3, 5)], &[0, 0])]
#[case::crlf("ab\r\ncd", &[(0, 6)], &[(0, 2), (4, 6)], &[0, 0])]
#[case::leading_break("\nab", &[(0, 3)], &[(1, 3)], &[0])]
#[case::trailing_break("ab\n", &[(0, 3)], &[(0, 2)], &[0])]
#[case::only_breaks("a\n\r\nb", &[(1, 4)], &[], &[])]
#[case::three_lines("a\nb\nc", &[(0, 5)], &[(0, 1), (2, 3), (4, 5)], &[0, 0, 0])]
#[case::discontiguous("ab\ncd ef", &[(6, 8), (0, 5)], &[(6, 8), (0, 2), (3, 5)], &[0, 1, 1])]
fn test_split_multiline_offsets(
    #[case] text: &str,
    #[case] raw: &[(usize, usize)],
    #[case] expected: &[(usize, usize)],
    #[case] expected_map: &[usize],
) {
    let span = Span::new("T1", "Entity", offsets(raw), "entity")
        .split_multiline_offsets(&DocumentText::new(text));

    assert_eq!(span.offsets(), offsets(expected).as_slice());
    assert_eq!(span.segmented_offsets_map(), expected_map);
}

#[test]
fn test_no_segment_contains_a_break() {
    let text = "first line\r\nsecond\n\nthird\rfourth";
    let document = DocumentText::new(text);
    let raw = offsets(&[(0, text.len()), (3, 15), (11, 12), (17, 27)]);

    let span = Span::new("T1", "Entity", raw.clone(), "entity").split_multiline_offsets(&document);

    assert_eq!(span.offsets().len(), span.segmented_offsets_map().len());
    for (segment, &original) in span.offsets().iter().zip(span.segmented_offsets_map()) {
        let slice = document.slice(segment.from, segment.to);
        assert!(!slice.chars().any(is_break), "segment {} contains a break", segment);
        assert!(!segment.is_empty(), "segment {} is empty", segment);
        assert!(segment.from >= raw[original].from && segment.to <= raw[original].to);
    }
}

#[test]
fn test_fragments_match_offsets_for_any_order() {
    let text = DocumentText::new("one two three four five six");
    let permutations = [
        [(0, 3), (8, 13), (19, 23)],
        [(19, 23), (0, 3), (8, 13)],
        [(8, 13), (19, 23), (0, 3)],
    ];

    for ranges in permutations {
        let span = Span::new("T1", "Entity", offsets(&ranges), "entity")
            .split_multiline_offsets(&text)
            .build_fragments()
            .unwrap();

        let fragments = span.fragments();
        assert_eq!(fragments.len(), span.offsets().len());
        assert!(fragments
            .windows(2)
            .all(|pair| pair[0].midpoint_sum() <= pair[1].midpoint_sum()));
        assert_eq!(span.whole_from(), fragments.iter().map(|f| f.from).min().unwrap());
        assert_eq!(span.whole_to(), fragments.iter().map(|f| f.to).max().unwrap());
        assert_eq!(span.whole_from(), 0);
        assert_eq!(span.whole_to(), 23);

        let head = span.head_fragment();
        assert!(fragments.iter().all(|f| f.midpoint_sum() <= head.midpoint_sum()));
        assert_eq!(head.offsets(), Offsets::new(19, 23));
    }
}

#[test]
fn test_fragment_ordinals_point_at_offsets() {
    let text = DocumentText::new("alpha\nbeta gamma");
    let span = Span::new("T1", "Entity", offsets(&[(11, 16), (0, 10)]), "entity")
        .split_multiline_offsets(&text)
        .build_fragments()
        .unwrap();

    for fragment in span.fragments() {
        assert_eq!(span.offsets()[fragment.ordinal], fragment.offsets());
        assert_eq!(fragment.span_id, "T1");
    }
    assert_eq!(span.segmented_offsets_map(), &[0, 1, 1]);
}

#[test]
fn test_span_on_breaks_only_cannot_be_fragmented() {
    let text = DocumentText::new("a\r\nb");
    let result = Span::new("T5", "Entity", offsets(&[(1, 3)]), "entity")
        .split_multiline_offsets(&text)
        .build_fragments();

    assert!(matches!(result, Err(SpanError::NoFragments { span_id }) if span_id == "T5"));
}

#[test]
fn test_reset_allows_resegmentation() {
    let span = Span::new("T1", "Entity", offsets(&[(0, 5)]), "entity")
        .split_multiline_offsets(&DocumentText::new("ab\ncd"))
        .build_fragments()
        .unwrap();
    assert_eq!(span.fragments().len(), 2);

    // Same offsets over re-tokenized text without the break
    let span = span
        .reset()
        .split_multiline_offsets(&DocumentText::new("ab cd"))
        .build_fragments()
        .unwrap();
    assert_eq!(span.fragments().len(), 1);
    assert_eq!(span.head_fragment().offsets(), Offsets::new(0, 5));
}
