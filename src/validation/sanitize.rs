//! Message sanitization
//!
//! Turns untrusted text into bounded, display-safe strings for error
//! messages. These helpers only make text safe to interpolate; they are not
//! a general security control.

/// Maximum number of characters of a value echoed back in a message.
pub const MAX_DISPLAY_LENGTH: usize = 50;

/// Maximum number of characters of an error message.
pub const MAX_MESSAGE_LENGTH: usize = 200;

/// Shown when nothing is left after stripping.
pub const EMPTY_PLACEHOLDER: &str = "[empty]";

/// Shown for an absent value.
pub const ABSENT_LITERAL: &str = "null";

const ELLIPSIS: &str = "...";

/// Makes a rejected value safe to embed in a user-facing message.
///
/// Control and whitespace characters are removed wherever they appear, the
/// remainder is cut to [`MAX_DISPLAY_LENGTH`] characters, and an empty result
/// becomes [`EMPTY_PLACEHOLDER`]. The output is never empty.
pub fn sanitize_for_display(value: Option<&str>) -> String {
    let Some(value) = value else {
        return ABSENT_LITERAL.to_string();
    };

    let sanitized: String = value
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .take(MAX_DISPLAY_LENGTH)
        .collect();

    if sanitized.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        sanitized
    }
}

/// Normalizes an error message before it goes into an error report.
///
/// Whitespace runs (tabs and line breaks included) collapse into a single
/// space, and messages over [`MAX_MESSAGE_LENGTH`] characters are cut and
/// suffixed with `...`.
pub fn sanitize_error_message(message: Option<&str>) -> String {
    let Some(message) = message else {
        return "Invalid input".to_string();
    };

    let collapsed = message.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_with_ellipsis(collapsed, MAX_MESSAGE_LENGTH)
}

/// Cleans a raw input value for logs and type-mismatch messages.
///
/// Control characters are dropped and the result is trimmed; values over
/// [`MAX_DISPLAY_LENGTH`] characters are cut and suffixed with `...`.
pub fn sanitize_input(input: Option<&str>) -> String {
    let Some(input) = input else {
        return ABSENT_LITERAL.to_string();
    };

    let stripped: String = input.chars().filter(|c| !c.is_control()).collect();
    truncate_with_ellipsis(stripped.trim().to_string(), MAX_DISPLAY_LENGTH)
}

fn truncate_with_ellipsis(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text,
    }
}
