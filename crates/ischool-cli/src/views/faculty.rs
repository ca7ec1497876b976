use ischool_core::sections::FacultySection;
use ischool_core::{FacultyMember, FilterKey};

use super::{heading, overlay, status_block, wrap, ViewOptions};

pub fn render(faculty: &FacultySection, opts: &ViewOptions) -> Vec<String> {
    let mut lines = heading("Faculty Information", '=');

    if let Some(status) = status_block(faculty.section.state(), "Loading...") {
        lines.extend(status);
        return lines;
    }

    lines.extend(wrap(&filter_bar(faculty.filter.active()), opts.width, ""));
    lines.push(String::new());

    let visible = faculty.visible_members();
    if visible.is_empty() {
        lines.push(format!(
            "No faculty members match '{}'.",
            faculty.filter.active()
        ));
    }
    for member in visible {
        lines.push(format!("  o {}", member.name));
    }

    if let Some(member) = faculty.member.visible() {
        lines.extend(overlay(&member.name, &member_detail(member), opts));
    }

    lines
}

fn filter_bar(active: FilterKey) -> String {
    FilterKey::buttons()
        .map(|key| {
            if key == active {
                format!("*{key}*")
            } else {
                key.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn member_detail(member: &FacultyMember) -> Vec<String> {
    let mut body = vec![member.title.clone(), format!("Office: {}", member.office)];
    if let Some(email) = member.email() {
        body.push(format!("Email: {email}"));
    }
    if let Some(phone) = member.phone() {
        body.push(format!("Phone: {phone}"));
    }
    if let Some(website) = member.website() {
        body.push(format!("Website: {website}"));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use ischool_core::ErrorMode;

    fn loaded() -> FacultySection {
        let mut faculty = FacultySection::new(ErrorMode::Uniform);
        let ticket = faculty.section.mount().unwrap();
        let member = |name: &str| FacultyMember {
            name: name.to_string(),
            title: "Professor".to_string(),
            office: "GOL-1000".to_string(),
            website: Some("https://example.edu/~bob".to_string()),
            ..FacultyMember::default()
        };
        faculty
            .section
            .complete(ticket, Ok(vec![member("Bob"), member("Alice"), member("Bea")]));
        faculty
    }

    #[test]
    fn test_filter_bar_marks_active() {
        assert!(filter_bar(FilterKey::All).starts_with("*All* A B C"));
        assert!(filter_bar(FilterKey::Letter('C')).contains(" B *C* D "));
    }

    #[test]
    fn test_filtered_cards() {
        let mut faculty = loaded();
        faculty.set_filter(FilterKey::Letter('B'));
        let lines = render(&faculty, &ViewOptions::default());
        let cards: Vec<&String> = lines.iter().filter(|l| l.starts_with("  o ")).collect();
        assert_eq!(cards, vec!["  o Bob", "  o Bea"]);

        faculty.set_filter(FilterKey::Letter('Z'));
        let text = render(&faculty, &ViewOptions::default()).join("\n");
        assert!(text.contains("No faculty members match 'Z'."));
    }

    #[test]
    fn test_member_overlay_skips_absent_fields() {
        let mut faculty = loaded();
        faculty.select_by_name("Alice");
        let text = render(&faculty, &ViewOptions::default()).join("\n");
        assert!(text.contains("Office: GOL-1000"));
        assert!(text.contains("Website: https://example.edu/~bob"));
        assert!(!text.contains("Email:"));
        assert!(!text.contains("Phone:"));
    }
}
