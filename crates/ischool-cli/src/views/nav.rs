use ischool_core::NavigationController;

use super::ViewOptions;

const TITLE: &str = "[=] Rochester Institute of Technology";

/// Sticky app bar at the top of the page
pub fn render_bar(opts: &ViewOptions) -> Vec<String> {
    vec![TITLE.to_string(), "#".repeat(opts.width.max(TITLE.len()))]
}

/// Drawer listing every section. Drawn over the page, so it never shifts anchors.
pub fn render_drawer(nav: &NavigationController) -> Vec<String> {
    if !nav.is_open() {
        return Vec::new();
    }
    let mut lines = vec!["Menu:".to_string()];
    for entry in nav.entries() {
        lines.push(format!("  > {entry}"));
    }
    lines.push(String::new());
    lines
}
