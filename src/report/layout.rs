//! Width helpers for fixed-column text. Widths count `char`s, not bytes.

/// Centers `text` in a field of `width`, filling both sides with `fill`.
///
/// When the padding is odd the extra fill goes on the right. Text wider than
/// the field is returned unchanged.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(pad - left));
    out
}

/// Truncates `text` to `width` characters, then space-pads it on the right.
pub fn fit_left(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Right-justifies `text` in a field of `width`; never truncates.
pub fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(width.max(len));
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out.push_str(text);
    out
}
