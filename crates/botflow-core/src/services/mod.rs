//! Procedure layer: authorization plus storage access for each API operation.

pub mod auth;
pub mod results;
pub mod typebots;
pub mod webhook_blocks;

/// Parse a comma-separated id list from query input.
///
/// Splitting an empty string naively yields one empty entry; a supplied but
/// meaningless list must behave like an omitted one, so blanks are stripped
/// and an empty outcome becomes `None`.
pub fn parse_id_list(raw: Option<&str>) -> Option<Vec<String>> {
    let ids: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    if ids.is_empty() { None } else { Some(ids) }
}
