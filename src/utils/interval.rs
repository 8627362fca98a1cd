/// Renders a duration given in milliseconds as `HH:MM:SS.mmm`.
///
/// Hours are not wrapped at 24, so a gap of two days renders as `48:00:00.000`.
/// Negative durations (comments timestamped before their post) get a leading `-`.
pub fn format_millis(millis: f64) -> String {
    let total = millis.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let ms = total % 1000;
    let secs = (total / 1000) % 60;
    let mins = (total / 60_000) % 60;
    let hours = total / 3_600_000;

    format!("{sign}{hours:02}:{mins:02}:{secs:02}.{ms:03}")
}
