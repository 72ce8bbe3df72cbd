//! Palette constants
//!
//! Emitted as `:root` custom properties ahead of the global stylesheet,
//! which only refers to them through `var(...)`.

// === Brand ===
pub const PRIMARY: &str = "#2563eb";
pub const PRIMARY_DEEP: &str = "#4f46e5";
pub const PRIMARY_SOFT: &str = "rgba(37, 99, 235, 0.1)";

// === Surfaces ===
pub const BACKGROUND: &str = "#f8fafc";
pub const CARD: &str = "#ffffff";
pub const BORDER: &str = "#e2e8f0";

// === Text ===
pub const FOREGROUND: &str = "#0f172a";
pub const MUTED: &str = "#64748b";

// === Semantic ===
pub const SUCCESS: &str = "#16a34a";
pub const WARNING: &str = "#d97706";
pub const DANGER: &str = "#dc2626";
pub const INFO: &str = "#0284c7";

/// `:root` custom property block for the constants above.
pub fn root_properties() -> String {
    [
        ("--primary", PRIMARY),
        ("--primary-deep", PRIMARY_DEEP),
        ("--primary-soft", PRIMARY_SOFT),
        ("--background", BACKGROUND),
        ("--card", CARD),
        ("--border", BORDER),
        ("--foreground", FOREGROUND),
        ("--muted", MUTED),
        ("--success", SUCCESS),
        ("--warning", WARNING),
        ("--danger", DANGER),
        ("--info", INFO),
    ]
    .iter()
    .fold(String::from(":root {\n"), |mut css, (name, value)| {
        css.push_str(&format!("  {}: {};\n", name, value));
        css
    }) + "}\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_properties() {
        let root = root_properties();
        assert!(root.starts_with(":root {"));
        assert!(root.contains("  --primary: #2563eb;\n"));
        assert!(root.ends_with("}\n"));
    }

    #[test]
    fn test_stylesheet_only_uses_declared_properties() {
        let root = root_properties();
        let css = crate::theme::GLOBAL_STYLES;
        let mut rest = css;
        while let Some(start) = rest.find("var(--") {
            let tail = &rest[start + 4..];
            let end = tail.find(|c: char| c == ')' || c == ',').unwrap();
            let name = &tail[..end];
            assert!(
                root.contains(&format!("{}:", name)) || css.contains(&format!("{}:", name)),
                "undeclared {}",
                name
            );
            rest = &tail[end..];
        }
    }
}
