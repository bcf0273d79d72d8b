/// Marker a message must start with to be treated as a report.
pub const COMMAND_PREFIX: &str = "#รายงาน";

/// Extracts report text from a chat message.
///
/// The message is trimmed and must start with [`COMMAND_PREFIX`]; exactly one
/// leading prefix is removed and the remainder trimmed again. Returns `None`
/// for messages that are not report commands.
pub fn extract_report(message: &str) -> Option<&str> {
    message
        .trim()
        .strip_prefix(COMMAND_PREFIX)
        .map(str::trim)
}
