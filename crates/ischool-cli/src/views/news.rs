use ischool_core::sections::NewsSection;

use super::{heading, status_block, wrap, ViewOptions};

pub fn render(news: &NewsSection, opts: &ViewOptions) -> Vec<String> {
    let mut lines = heading("NEWS @RIT", '=');

    if let Some(status) = status_block(news.section.state(), "Loading...") {
        lines.extend(status);
        return lines;
    }

    if news.items().is_empty() {
        lines.push("No news.".to_string());
    }
    for item in news.items() {
        lines.push(String::new());
        lines.push(format!("{}: {}", item.date, item.title));
        lines.extend(wrap(&item.description, opts.width, "    "));
    }
    lines
}
