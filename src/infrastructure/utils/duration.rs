/// Formats a millisecond duration as `"Xm Ys"`, flooring to whole seconds.
/// Matches the rendering of the repository statistics tables.
pub fn format_duration_ms(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;
    format!("{minutes}m {remaining_seconds}s")
}
