use std::num::ParseIntError;

/// Returns the body of `token` once `prefix` and the surrounding `[` `]` are removed.
///
/// `strip_bracketed("pf:[0,1]", "pf:")` yields `Some("0,1")`.
#[inline]
pub fn strip_bracketed<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    token
        .strip_prefix(prefix)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

/// Splits a comma separated list, trimming each item.
///
/// Empty items are dropped, so `"0,1,"` and `"0,1"` give the same result and `""` gives none.
pub fn split_list(body: &str) -> impl Iterator<Item = &str> {
    body.split(',').map(str::trim).filter(|s| !s.is_empty())
}

pub fn parse_usize_list(body: &str) -> Result<Vec<usize>, ParseIntError> {
    split_list(body).map(str::parse::<usize>).collect()
}
