//! Attaching fragments to chunks
//!
//! Each fragment is drawn in the chunk containing its start. A fragment that
//! starts in whitespace goes to the next chunk. Chunks only record a handle;
//! the fragment stays owned by its span.

use crate::models::{Chunk, Fragmented, LayoutError, Span, SpanError};
use std::collections::HashMap;

/// Assign every fragment of the spans in `order` to a chunk
///
/// `chunks` must be ascending by offset. Fragments are appended to each
/// chunk in span order.
pub fn assign_fragments(
    chunks: &mut [Chunk],
    spans: &mut HashMap<String, Span<Fragmented>>,
    order: &[String],
) -> Result<(), LayoutError> {
    for id in order {
        let span = spans
            .get_mut(id)
            .ok_or_else(|| SpanError::UnknownSpan(id.clone()))?;

        for fragment in span.fragments_mut() {
            let position = chunks.partition_point(|chunk| chunk.to() <= fragment.from);
            let chunk = chunks
                .get_mut(position)
                .ok_or_else(|| LayoutError::FragmentOutsideChunks {
                    span_id: fragment.span_id.clone(),
                    ordinal: fragment.ordinal,
                    from: fragment.from,
                })?;

            fragment.chunk = Some(chunk.index());
            chunk.fragments.push(fragment.reference());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_chunks;
    use crate::models::{FragmentRef, Offsets};
    use crate::text::DocumentText;

    fn span(id: &str, text: &DocumentText, ranges: &[(usize, usize)]) -> Span<Fragmented> {
        Span::new(id, "Entity", ranges.iter().map(|&r| r.into()).collect(), "entity")
            .split_multiline_offsets(text)
            .build_fragments()
            .unwrap()
    }

    #[test]
    fn test_fragments_land_in_containing_chunk() {
        let text = DocumentText::new("Alice met\nBob");
        let mut chunks = build_chunks(
            &text,
            &[Offsets::new(0, 5), Offsets::new(6, 9), Offsets::new(10, 13)],
        );
        let mut spans = HashMap::new();
        spans.insert("T1".to_string(), span("T1", &text, &[(6, 13)]));
        spans.insert("T2".to_string(), span("T2", &text, &[(0, 5)]));

        assign_fragments(&mut chunks, &mut spans, &["T2".to_string(), "T1".to_string()]).unwrap();

        assert_eq!(
            chunks[0].fragments,
            vec![FragmentRef {
                span_id: "T2".to_string(),
                ordinal: 0
            }]
        );
        assert_eq!(chunks[1].fragments.len(), 1);
        assert_eq!(chunks[2].fragments[0].ordinal, 1);

        let t1 = &spans["T1"];
        let placed: Vec<_> = t1.fragments().iter().map(|f| f.chunk).collect();
        assert_eq!(placed, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_fragment_in_whitespace_goes_to_next_chunk() {
        let text = DocumentText::new("a  b");
        let mut chunks = build_chunks(&text, &[Offsets::new(0, 1), Offsets::new(3, 4)]);
        let mut spans = HashMap::new();
        spans.insert("T1".to_string(), span("T1", &text, &[(2, 4)]));

        assign_fragments(&mut chunks, &mut spans, &["T1".to_string()]).unwrap();
        assert_eq!(chunks[1].fragments.len(), 1);
    }

    #[test]
    fn test_fragment_past_last_chunk() {
        let text = DocumentText::new("a bc");
        let mut chunks = build_chunks(&text, &[Offsets::new(0, 1)]);
        let mut spans = HashMap::new();
        spans.insert("T1".to_string(), span("T1", &text, &[(2, 4)]));

        let result = assign_fragments(&mut chunks, &mut spans, &["T1".to_string()]);
        assert!(matches!(
            result,
            Err(LayoutError::FragmentOutsideChunks { from: 2, .. })
        ));
    }
}
