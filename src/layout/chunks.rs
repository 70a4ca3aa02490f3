//! Chunk building from token offsets
//!
//! Tokenization happens upstream; here each token becomes one chunk, and the
//! text between the previous token and this one becomes the chunk's space.

use crate::models::{Chunk, Offsets};
use crate::text::DocumentText;

/// Build one chunk per token
///
/// Tokens must be ascending and non-overlapping for the chunks to tile the
/// text. An overlapping token gets an empty space and is logged.
pub fn build_chunks(text: &DocumentText, token_offsets: &[Offsets]) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(token_offsets.len());
    let mut last_to = 0;

    for (index, token) in token_offsets.iter().enumerate() {
        if token.from < last_to {
            log::warn!(
                "token {} {} overlaps previous token ending at {}",
                index,
                token,
                last_to
            );
        }

        let space = text.slice(last_to.min(token.from), token.from);
        chunks.push(Chunk::new(
            index,
            text.slice(token.from, token.to),
            token.from,
            token.to,
            space,
        ));
        last_to = token.to;
    }

    log::debug!("built {} chunk(s) over {} code units", chunks.len(), text.len());
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(ranges: &[(usize, usize)]) -> Vec<Offsets> {
        ranges.iter().map(|&r| r.into()).collect()
    }

    #[test]
    fn test_chunks_tile_text() {
        let text = DocumentText::new("Hello world\n  again");
        let chunks = build_chunks(&text, &tokens(&[(0, 5), (6, 11), (14, 19)]));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text(), "Hello");
        assert_eq!(chunks[0].space(), "");
        assert_eq!(chunks[1].space(), " ");
        assert_eq!(chunks[2].space(), "\n  ");
        assert_eq!(chunks[2].text(), "again");
        for pair in chunks.windows(2) {
            assert!(pair[1].follows(&pair[0]));
        }
    }

    #[test]
    fn test_leading_whitespace_belongs_to_first_chunk() {
        let text = DocumentText::new("  hi");
        let chunks = build_chunks(&text, &tokens(&[(2, 4)]));
        assert_eq!(chunks[0].space(), "  ");
        assert_eq!(chunks[0].index(), 0);
    }

    #[test]
    fn test_overlapping_token_gets_empty_space() {
        let text = DocumentText::new("abcdef");
        let chunks = build_chunks(&text, &tokens(&[(0, 4), (2, 6)]));
        assert_eq!(chunks[1].space(), "");
        assert_eq!(chunks[1].text(), "cdef");
    }
}
