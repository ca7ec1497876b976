use ischool_core::sections::{DegreeSection, DegreeTab};

use super::{heading, overlay, status_block, wrap, ViewOptions};

pub fn render(degrees: &DegreeSection, opts: &ViewOptions) -> Vec<String> {
    let mut lines = heading("Degrees", '=');

    if let Some(status) = status_block(degrees.section.state(), "Loading...") {
        lines.extend(status);
        return lines;
    }

    lines.push(String::new());
    lines.extend(heading("Degree Information", '-'));
    lines.push(tab_bar(degrees.tab));

    for degree in degrees.active_degrees() {
        lines.push(String::new());
        lines.push(format!("  {}", degree.title));
        lines.extend(wrap(&degree.description, opts.width, "    "));

        if let Some(concentrations) = &degree.concentrations {
            let cards: Vec<String> = concentrations.iter().map(|c| format!("[{c}]")).collect();
            lines.push("    Concentrations:".to_string());
            lines.extend(wrap(&cards.join(" "), opts.width, "      "));
        }
        if let Some(certificates) = &degree.available_certificates {
            lines.push("    Available Certificates".to_string());
            for certificate in certificates {
                lines.push(format!("      - {certificate}"));
            }
        }
    }

    if let Some(detail) = degrees.concentration_detail() {
        let mut body = vec![format!("- {}", detail.name)];
        if let Some(related) = &detail.related {
            for name in related {
                body.push(format!("    * {name}"));
            }
        }
        lines.extend(overlay("Concentration Details", &body, opts));
    }

    lines
}

fn tab_bar(active: DegreeTab) -> String {
    DegreeTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("*{}*", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ischool_core::{Degree, Degrees, ErrorMode, IschoolError};

    fn loaded() -> DegreeSection {
        let mut section = DegreeSection::new(ErrorMode::Uniform);
        let ticket = section.section.mount().unwrap();
        section.section.complete(
            ticket,
            Ok(Degrees {
                undergraduate: vec![Degree {
                    title: "CS".to_string(),
                    description: "Computing".to_string(),
                    concentrations: Some(vec!["AI".to_string(), "Systems".to_string()]),
                    available_certificates: None,
                }],
                graduate: vec![Degree {
                    title: "Advanced Certificates".to_string(),
                    available_certificates: Some(vec!["Web Development".to_string()]),
                    ..Degree::default()
                }],
            }),
        );
        section
    }

    #[test]
    fn test_tabs_switch_panel() {
        let mut section = loaded();
        let text = render(&section, &ViewOptions::default()).join("\n");
        assert!(text.contains("*Undergraduate Degrees* | Graduate Degrees"));
        assert!(text.contains("[AI] [Systems]"));
        assert!(!text.contains("Web Development"));

        section.set_tab(DegreeTab::Graduate);
        let text = render(&section, &ViewOptions::default()).join("\n");
        assert!(text.contains("Available Certificates"));
        assert!(text.contains("- Web Development"));
    }

    #[test]
    fn test_concentration_overlay_lists_related() {
        let mut section = loaded();
        section.select_concentration("AI");
        let text = render(&section, &ViewOptions::default()).join("\n");
        assert!(text.contains("Concentration Details"));
        assert!(text.contains("* Systems"));
    }

    #[test]
    fn test_error_block() {
        let mut section = DegreeSection::new(ErrorMode::Legacy);
        let ticket = section.section.mount().unwrap();
        section
            .section
            .complete(ticket, Err(IschoolError::Network("timed out".to_string())));
        let lines = render(&section, &ViewOptions::default());
        assert_eq!(lines.last().unwrap(), "Error: Network error: timed out");
    }
}
