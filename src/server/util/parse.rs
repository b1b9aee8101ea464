/// Parses a siege id taken from a request path.
///
/// Ids that are not integers cannot match any siege, so they are reported as `None` and
/// handled like an absent siege instead of as a bad request.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Some(i32)` - Parsed id
/// - `None` - The segment is not a valid id
pub fn parse_siege_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}
