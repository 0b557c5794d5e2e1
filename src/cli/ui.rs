use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Label,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Label => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Formats a `label: value` line, e.g. `USD/PLN: 3.82`.
pub fn rate_line(label: &str, value: &str) -> String {
    format!(
        "{} {}",
        style_text(&format!("{label}:"), StyleType::Label),
        style_text(value, StyleType::Value)
    )
}
