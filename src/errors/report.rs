use super::errors::{Error, ErrorTip};

/// Returns the text of the 1-based `line` in `source`, without its newline.
pub fn get_line_text(source: &str, line: u32) -> Option<&str> {
    let index = usize::try_from(line).ok()?.checked_sub(1)?;
    source.split('\n').nth(index)
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnrecognizedCharacter
/// -> main.lo
///   |
/// 3 | var x = @
///   |
/// ```
pub fn render(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip));
    } else {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    }
    out.push_str(&format!("   {}\n", error.message()));

    if let Some(file) = error.get_file() {
        out.push_str(&format!("-> {}\n", file));
    }

    let line = error.get_line();
    let Some(line_text) = get_line_text(source, line) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    out
}
