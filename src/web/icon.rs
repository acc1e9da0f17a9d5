/// Background colour of the placeholder icon
pub const ICON_BACKGROUND: &str = "#111827";
/// Text colour of the placeholder icon
pub const ICON_FOREGROUND: &str = "#fff";
/// Label drawn on the placeholder icon
pub const ICON_LABEL: &str = "GT";

/// Renders the placeholder app icon as SVG markup
///
/// A 24x24 rounded square with a centred label.
pub fn render_icon() -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">"#,
            r#"<rect width="24" height="24" rx="4" fill="{bg}"/>"#,
            r#"<text x="12" y="16" text-anchor="middle" font-size="10" fill="{fg}">{label}</text>"#,
            "</svg>"
        ),
        bg = ICON_BACKGROUND,
        fg = ICON_FOREGROUND,
        label = ICON_LABEL,
    )
}
