//! Word wrapping into fixed-width lines.
//!
//! Every produced line is exactly `width` characters, right-padded with
//! spaces. An over-long line is broken at the last hyphen before the width
//! limit (the hyphen stays on the first part), else at the last space within
//! the limit (the space is dropped), else hard at `width` without losing a
//! character. Hyphens win over spaces found further right.
//!
//! Widths are counted in `char`s.

/// Wrap `text` to `width`, dropping trailing line breaks.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_with(text, width, true)
}

/// Number of lines [`wrap`] produces.
pub fn measure(text: &str, width: usize) -> usize {
    wrap(text, width).len()
}

/// Wrap `text` to `width`, optionally keeping trailing line breaks as blank lines.
pub fn wrap_with(text: &str, width: usize, trim_trailing_breaks: bool) -> Vec<String> {
    let width = width.max(1);

    if text.trim().is_empty() {
        return vec![blank(width)];
    }

    let mut text = text.replace('\t', " ");
    if trim_trailing_breaks {
        let trimmed = text.trim_end_matches(&['\n', '\r'][..]).len();
        text.truncate(trimmed);
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    for segment in normalized.split('\n') {
        split_segment(segment, width, &mut lines);
    }
    lines
}

fn split_segment(segment: &str, width: usize, out: &mut Vec<String>) {
    let mut rest: Vec<char> = segment.chars().collect();

    while rest.len() > width {
        let (head, tail_start) = break_point(&rest, width);
        out.push(pad(&rest[..head], width));
        rest.drain(..tail_start);
    }

    out.push(pad(&rest, width));
}

/// Where to cut a line longer than `width`: (end of the kept part, start of the remainder).
fn break_point(chars: &[char], width: usize) -> (usize, usize) {
    for i in (0..=width).rev() {
        if i != width && chars[i] == '-' {
            return (i + 1, i + 1);
        }
        if chars[i] == ' ' {
            return (i, i + 1);
        }
    }
    (width, width)
}

fn pad(chars: &[char], width: usize) -> String {
    let mut s: String = chars.iter().collect();
    let missing = width.saturating_sub(chars.len());
    s.extend(std::iter::repeat(' ').take(missing));
    s
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}
