//! Text helpers (width calculations, truncation, padding, wrapping).
//!
//! These helpers are pure (string in/string out) and live under `core` so the
//! render layer and components can share them.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 3;

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

pub fn grapheme_width(grapheme: &str) -> usize {
    let mut width = 0;
    for ch in grapheme.chars() {
        if ch == '\t' {
            width += TAB_WIDTH;
            continue;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

/// Terminal column width of `input`.
pub fn visible_width(input: &str) -> usize {
    grapheme_segments(input).map(grapheme_width).sum()
}

/// Cut `text` to at most `max_width` columns, appending `ellipsis` when cut.
/// With `pad`, the result is right-padded with spaces to exactly `max_width`.
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str, pad: bool) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = visible_width(text);
    if text_width <= max_width {
        if pad {
            return format!("{text}{}", " ".repeat(max_width - text_width));
        }
        return text.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    let target_width = max_width.saturating_sub(ellipsis_width);
    if target_width == 0 {
        return ellipsis.chars().take(max_width).collect();
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    for grapheme in grapheme_segments(text) {
        let width = grapheme_width(grapheme);
        if current_width + width > target_width {
            break;
        }
        truncated.push_str(grapheme);
        current_width += width;
    }
    truncated.push_str(ellipsis);

    if pad {
        let result_width = visible_width(&truncated);
        if result_width < max_width {
            truncated.push_str(&" ".repeat(max_width - result_width));
        }
    }
    truncated
}

/// Lay `left` and `right` out on one row of `width` columns, right-aligning
/// `right`. The left side is truncated first when both do not fit.
pub fn justify(left: &str, right: &str, width: usize) -> String {
    let right = truncate_to_width(right, width, "…", false);
    let right_width = visible_width(&right);
    let left_budget = width.saturating_sub(right_width + 1);
    let left = truncate_to_width(left, left_budget, "…", true);
    let line = format!("{left}{}{right}", if left_budget > 0 { " " } else { "" });
    truncate_to_width(&line, width, "", true)
}

/// Greedy word wrap to `width` columns; words longer than a row are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = visible_width(word);
            let needed = if current.is_empty() { word_width } else { word_width + 1 };

            if current_width + needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            for grapheme in grapheme_segments(word) {
                let g_width = grapheme_width(grapheme);
                if current_width + g_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += g_width;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{justify, truncate_to_width, visible_width, wrap_words};

    #[test]
    fn wide_graphemes_count_two_columns() {
        assert_eq!(visible_width("abc"), 3);
        assert_eq!(visible_width("日本"), 4);
        assert_eq!(visible_width("a\tb"), 5);
    }

    #[test]
    fn truncate_appends_ellipsis_and_pads() {
        assert_eq!(truncate_to_width("hello world", 8, "…", false), "hello w…");
        assert_eq!(truncate_to_width("hi", 4, "…", true), "hi  ");
        assert_eq!(truncate_to_width("anything", 0, "…", true), "");
    }

    #[test]
    fn justify_right_aligns_value() {
        let line = justify("Calories", "required", 20);
        assert_eq!(line, "Calories    required");
        assert_eq!(visible_width(&line), 20);
    }

    #[test]
    fn justify_keeps_width_when_cramped() {
        let line = justify("Saturated Fat (g)", "optional", 12);
        assert_eq!(visible_width(&line), 12);
        assert!(line.ends_with("optional"));
    }

    #[test]
    fn wrap_breaks_on_words_and_splits_long_words() {
        assert_eq!(wrap_words("word word", 4), vec!["word", "word"]);
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_words("", 5), vec![""]);
    }
}
