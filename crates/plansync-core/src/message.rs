//! Day-message formatting for plan comments.

use crate::model::TaskSummary;

/// Body line written when a day has no tasks due.
pub const NO_TASKS_LINE: &str = "🏝️ No tasks defined.";

/// Header line that keys a day's comment. The trailing newline is part of
/// the sync key: prefix matching on it keeps "Monday" from matching a
/// comment that merely mentions Monday in its first line.
pub fn day_header(weekday: &str) -> String {
    format!("🗓️ {weekday}\n")
}

/// Full comment text for one day: header plus one line per task, or a
/// placeholder line when nothing is due.
pub fn day_message(weekday: &str, tasks: &[TaskSummary]) -> String {
    let mut lines = vec![day_header(weekday)];
    if tasks.is_empty() {
        lines.push(NO_TASKS_LINE.to_string());
    } else {
        lines.extend(tasks.iter().map(|t| format!("🔍 {}", t.name)));
    }
    lines.join("\n")
}
