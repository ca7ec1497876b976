/// Social links shown in the page footer
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://www.facebook.com/ritcroatia/"),
    ("Twitter", "https://twitter.com/ritcroatia?lang=en"),
    ("Instagram", "https://www.instagram.com/rit_croatia/"),
    (
        "LinkedIn",
        "https://www.linkedin.com/school/rit-croatia/?originalSubdomain=hr",
    ),
];

pub fn render() -> Vec<String> {
    let mut lines = vec![
        "-".repeat(40),
        "(c) 2024 University Information".to_string(),
    ];
    for (name, url) in SOCIAL_LINKS {
        lines.push(format!("  {name:<10} {url}"));
    }
    lines
}
