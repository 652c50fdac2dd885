// Rupee display used by both cart surfaces
pub fn format_price(amount: u32) -> String {
    format!("\u{20B9}{amount}")
}


// Clip long descriptions to the grid column width
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{head}\u{2026}")
}
