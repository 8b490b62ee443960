//! Snippet truncation and summary extraction
//!
//! Two distinct truncation styles live here and are not interchangeable:
//! [`truncate`] caps a snippet with a single `…` character, while
//! [`summarize`] caps its output with three ASCII dots.

/// Sentence terminators, ASCII and full-width CJK.
const TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Closing quotes/brackets that may trail a terminator and stay attached
/// to the preceding sentence.
const CLOSERS: [char; 10] = ['"', '\'', '”', '’', ')', '）', ']', '】', '」', '』'];

/// Number of sentences kept by [`summarize`].
pub const MAX_SUMMARY_SENTENCES: usize = 4;

/// Truncate a snippet to at most `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes. When truncation happens the
/// result is the first `max_chars - 1` characters with trailing whitespace
/// stripped, followed by a single `…`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", head.trim_end())
}

/// Split text into sentence-like segments.
///
/// A segment ends at one or more terminator characters, optionally followed
/// by a single closing quote/bracket; the punctuation stays attached to the
/// segment. A trailing fragment without a terminator is kept as-is.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if TERMINATORS.contains(&c) {
            while let Some(&next) = chars.peek() {
                if TERMINATORS.contains(&next) {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if let Some(&next) = chars.peek() {
                if CLOSERS.contains(&next) {
                    current.push(next);
                    chars.next();
                }
            }
            let segment = current.trim();
            if !segment.is_empty() {
                segments.push(segment.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        segments.push(tail.to_string());
    }
    segments
}

/// Derive a short summary from a snippet.
///
/// Joins the first `max_sentences` sentence segments with a single space.
/// If the joined summary exceeds `max_chars` characters it is hard-truncated
/// to `max_chars - 3` characters (trailing whitespace stripped) and suffixed
/// with `"..."`. Empty input yields an empty summary.
pub fn summarize(text: &str, max_sentences: usize, max_chars: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let segments = split_sentences(text);
    let kept = max_sentences.min(segments.len());
    let summary = segments[..kept].join(" ");

    if summary.chars().count() <= max_chars {
        return summary;
    }
    let head: String = summary.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head.trim_end())
}
