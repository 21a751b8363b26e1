//! Line breaking for wrapped text blocks.
//!
//! Wrapping is a hard wrap: text is cut every `width` characters, ignoring word
//! boundaries. Characters are Unicode scalar values, not bytes.

/// Splits `text` into chunks of at most `width` characters.
///
/// Empty text yields no chunks.
///
/// ```
/// use logbook::layout::wrap::hard_wrap;
///
/// assert_eq!(hard_wrap("abcdefg", 3), vec!["abc", "def", "g"]);
/// assert!(hard_wrap("", 50).is_empty());
/// ```
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
  let chars: Vec<char> = text.chars().collect();
  chars.chunks(width.max(1)).map(|chunk| chunk.iter().collect()).collect()
}

/// Number of lines a wrapped block occupies, never less than one.
pub fn line_count(text: &str, width: usize) -> usize {
  text.chars().count().div_ceil(width.max(1)).max(1)
}

/// Number of whitespace separated words in `text`.
pub fn word_count(text: &str) -> usize { text.split_whitespace().count() }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hard_wrap_ignores_word_boundaries() {
    let text = "the quick brown fox";
    assert_eq!(hard_wrap(text, 7), vec!["the qui", "ck brow", "n fox"]);
  }

  #[test]
  fn test_hard_wrap_counts_characters_not_bytes() {
    let text = "é".repeat(51);
    let chunks = hard_wrap(&text, 50);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chars().count(), 50);
    assert_eq!(chunks[1], "é");
  }

  #[test]
  fn test_line_count_matches_chunks() {
    for len in [1, 49, 50, 51, 100, 101, 120, 250] {
      let text = "x".repeat(len);
      assert_eq!(line_count(&text, 50), hard_wrap(&text, 50).len(), "length {len}");
    }
    assert_eq!(line_count("", 50), 1);
  }

  #[test]
  fn test_word_count() {
    assert_eq!(word_count("https://example.org/data"), 1);
    assert_eq!(word_count("  see   https://a and https://b "), 4);
    assert_eq!(word_count(""), 0);
  }
}
