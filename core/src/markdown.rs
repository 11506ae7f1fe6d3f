use crate::models::RelayResponse;

/// Renders a relayed result as a single markdown document the user can paste
/// straight into an editor. Pure function: rendering the same result twice
/// yields identical output.
pub fn generate_markdown(result: &RelayResponse) -> String {
    let title = result.title.as_deref().unwrap_or("Untitled");
    let body = result.body.as_deref().unwrap_or("No content");
    let summary = result.summary.as_deref().unwrap_or("No summary");

    let formatted_tags = match &result.tags {
        Some(tags) if !tags.is_empty() => tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" "),
        _ => "No tags".to_string(),
    };

    format!(
        "# {title}\n\n{body}\n\n---\n\n## Summary\n{summary}\n\n**Tags:** {formatted_tags}"
    )
}

/// Human-readable file size, e.g. "1.5 MB".
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    // Trailing zeros dropped, two decimals max, matching "1.5 MB" not "1.50 MB".
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RelayResponse {
        RelayResponse {
            success: true,
            velog_response: None,
            message: None,
            title: Some("Debugging async Rust".to_string()),
            summary: Some("Three lessons learned.".to_string()),
            body: Some("The body.".to_string()),
            tags: Some(vec!["rust".to_string(), "async".to_string()]),
        }
    }

    #[test]
    fn renders_all_sections() {
        let md = generate_markdown(&result());
        assert!(md.starts_with("# Debugging async Rust\n"));
        assert!(md.contains("The body."));
        assert!(md.contains("## Summary\nThree lessons learned."));
        assert!(md.contains("**Tags:** #rust #async"));
    }

    #[test]
    fn substitutes_defaults_for_missing_fields() {
        let empty = RelayResponse {
            success: true,
            velog_response: None,
            message: None,
            title: None,
            summary: None,
            body: None,
            tags: None,
        };
        let md = generate_markdown(&empty);
        assert!(md.starts_with("# Untitled"));
        assert!(md.contains("No content"));
        assert!(md.contains("No summary"));
        assert!(md.contains("**Tags:** No tags"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = result();
        assert_eq!(generate_markdown(&result), generate_markdown(&result));
    }

    #[test]
    fn formats_file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    }
}
