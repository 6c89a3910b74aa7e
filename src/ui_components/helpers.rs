//! Layout and text helpers shared by the screens

/// How many cards fit per row, and the left padding that centers the row
pub fn calculate_grid_layout(available_width: f32, item_width: f32, spacing: f32) -> (usize, f32) {
    let per_row = ((available_width + spacing) / (item_width + spacing)).floor().max(1.0) as usize;
    let used = per_row as f32 * item_width + (per_row.saturating_sub(1)) as f32 * spacing;
    let padding = ((available_width - used) / 2.0).max(0.0);
    (per_row, padding)
}

/// Truncate to `max_chars` characters, appending an ellipsis when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
