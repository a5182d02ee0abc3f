//! Path template expansion
//!
//! Templates use `{name}` placeholders, e.g. `/v1/{param}/`. Placeholders are
//! filled positionally; the name only appears in error messages.

/// Why a path template could not be expanded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("no value for path parameter `{0}`")]
    MissingParam(String),

    #[error("{0} path parameter(s) left unused")]
    UnusedParams(usize),

    #[error("unclosed `{{` at byte {0}")]
    Unclosed(usize),
}

/// Substitute `params` into the placeholders of `template`
///
/// Each value is percent-encoded so it stays within one path segment.
///
/// # Errors
///
/// Returns `PathError` when there are fewer params than placeholders, more
/// params than placeholders, or a `{` without a matching `}`.
///
/// # Examples
/// ```
/// use rat_client::http::path::expand;
///
/// assert_eq!(expand("/v1/{user}/repos", &["ann b"]).unwrap(), "/v1/ann%20b/repos");
/// ```
pub fn expand<S: AsRef<str>>(template: &str, params: &[S]) -> Result<String, PathError> {
    let mut expanded = String::with_capacity(template.len());
    let mut params = params.iter();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        expanded.push_str(&rest[..open]);

        let after = &rest[open + 1..];
        let close = after.find('}').ok_or(PathError::Unclosed(offset + open))?;
        let name = &after[..close];

        let value = params
            .next()
            .ok_or_else(|| PathError::MissingParam(name.to_owned()))?;
        expanded.push_str(&urlencoding::encode(value.as_ref()));

        let consumed = open + 1 + close + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }
    expanded.push_str(rest);

    match params.count() {
        0 => Ok(expanded),
        unused => Err(PathError::UnusedParams(unused)),
    }
}
