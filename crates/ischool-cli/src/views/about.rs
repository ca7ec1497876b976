use ischool_core::sections::AboutSection;

use super::{heading, overlay, status_block, wrap, ViewOptions};

pub fn render(about: &AboutSection, opts: &ViewOptions) -> Vec<String> {
    let mut lines = heading("iSchool @ RIT", '=');

    if let Some(status) = status_block(about.section.state(), "Loading...") {
        lines.extend(status);
        return lines;
    }

    if let Some(data) = about.section.data() {
        lines.push(String::new());
        lines.push(data.title.clone());
        lines.extend(wrap(&data.description, opts.width, ""));
        lines.push(String::new());
        lines.push("[Show Quote]".to_string());
    }

    if let Some(quote) = about.quote.visible() {
        let mut body = wrap(&quote.text, opts.width.saturating_sub(4), "");
        body.push(String::new());
        body.push(format!("-- {}", quote.author));
        lines.extend(overlay("QUOTE", &body, opts));
    }

    lines
}
