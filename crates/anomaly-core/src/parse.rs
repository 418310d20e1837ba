use crate::errors::{AnomalyError, ErrorInfo};

fn parse_error(code: &str, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

/// Parses a literal integer list such as `[1, -2, 3]`.
///
/// This is the constrained replacement for the reference implementation's
/// free-form expression evaluation at the interactive boundary: only
/// bracketed or bare lists of decimal integers separated by commas and/or
/// whitespace are accepted, nothing is ever evaluated.
pub fn parse_int_list(text: &str) -> Result<Vec<i64>, AnomalyError> {
    let trimmed = text.trim();
    let inner = match (trimmed.strip_prefix('['), trimmed.strip_suffix(']')) {
        (Some(_), None) | (None, Some(_)) => {
            return Err(AnomalyError::Parse(
                parse_error("unbalanced-brackets", "list brackets must be balanced")
                    .with_context("input", trimmed),
            ));
        }
        (Some(rest), Some(_)) => &rest[..rest.len() - 1],
        (None, None) => trimmed,
    };

    let mut values = Vec::new();
    for (idx, token) in inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        let value: i64 = token.parse().map_err(|_| {
            AnomalyError::Parse(
                parse_error("invalid-integer", "list elements must be decimal integers")
                    .with_context("token", token)
                    .with_context("position", idx.to_string()),
            )
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(AnomalyError::Parse(
            parse_error("empty-list", "a list must contain at least one integer")
                .with_context("input", trimmed),
        ));
    }
    Ok(values)
}
