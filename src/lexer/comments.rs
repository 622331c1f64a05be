/// Blanks out `//` line comments.
///
/// Every byte from the opening `//` up to (not including) the next newline
/// becomes a space, so a multi-byte character turns into one space per byte.
/// Newlines and all text outside comments are kept as-is; the result has the
/// same byte length as the input and every newline stays at its offset.
pub fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut in_comment = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
                result.push('\n');
            } else {
                result.extend(std::iter::repeat(' ').take(c.len_utf8()));
            }
        } else if c == '/' && chars.peek() == Some(&'/') {
            in_comment = true;
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}
