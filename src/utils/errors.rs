/// Turn a command error into the text shown to the user
///
/// Service errors already carry a `❌` prefix and are passed through;
/// Discord transport errors get a short explanation instead of the raw text.
pub fn user_message(error_msg: &str) -> String {
    let lowered = error_msg.to_lowercase();

    if error_msg.starts_with('❌') {
        error_msg.to_string()
    } else if lowered.contains("429") || lowered.contains("rate limit") {
        "⚠️ **Rate Limited**: Discord is rate limiting us. Please try again in a moment.".to_string()
    } else if lowered.contains("http request") || lowered.contains("request error") {
        "⚠️ **Network Error**: Having trouble connecting. Please try again.".to_string()
    } else if !error_msg.trim().is_empty() {
        format!("❌ {}", error_msg.trim())
    } else {
        "❌ An error occurred while executing the command.".to_string()
    }
}
