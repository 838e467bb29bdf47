//! Cache key builders for all Quillpad cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses. The JWT blocklist keys live
//! in `quillpad-auth` beside the decoder that owns them.

/// Prefix applied to all Quillpad cache keys.
const PREFIX: &str = "quillpad";

/// Cache key for one page of the global index feed.
pub fn index_feed(page: u64, per_page: u64) -> String {
    format!("{PREFIX}:feed:index:p{page}:n{per_page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_feed_key() {
        assert_eq!(index_feed(2, 10), "quillpad:feed:index:p2:n10");
    }

    #[test]
    fn test_index_feed_key_varies_by_size() {
        assert_ne!(index_feed(1, 10), index_feed(1, 25));
    }
}
