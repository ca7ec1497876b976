//! Page and per-section commands
//!
//! Each command mounts only the sections it shows, applies the requested
//! UI state, then prints the rendered result.

use anyhow::Result;
use clap::Args;
use ischool_core::sections::{DegreeTab, TableKind};
use ischool_core::{ContentSource, FilterKey, SectionId};

use crate::site::Site;
use crate::views::ViewOptions;

#[derive(Args)]
pub struct PageArgs {
    /// Scroll to a section (About, Degrees, Employment, Faculty, News)
    #[arg(long)]
    pub goto: Option<String>,
}

#[derive(Args)]
pub struct AboutArgs {
    /// Open the quote overlay
    #[arg(long)]
    pub quote: bool,
}

#[derive(Args)]
pub struct DegreesArgs {
    /// Tab to show (undergraduate or graduate)
    #[arg(long, default_value = "undergraduate")]
    pub tab: DegreeTab,

    /// Show details for a concentration
    #[arg(long)]
    pub concentration: Option<String>,
}

#[derive(Args)]
pub struct EmploymentArgs {
    /// Page of the professional employment table
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Page of the co-op table
    #[arg(long, default_value = "1")]
    pub coop_page: usize,
}

#[derive(Args)]
pub struct FacultyArgs {
    /// First-letter filter: All or A-Z
    #[arg(long, default_value = "All")]
    pub filter: FilterKey,

    /// Show details for a faculty member
    #[arg(long)]
    pub member: Option<String>,
}

pub async fn page(
    site: &mut Site,
    source: &dyn ContentSource,
    args: PageArgs,
    opts: &ViewOptions,
) -> Result<()> {
    site.load(source).await;
    let page = site.compose(opts);

    let offset = match args.goto {
        Some(anchor) => {
            site.nav.toggle(true);
            site.nav.navigate_to(&anchor, &page).unwrap_or(0)
        }
        None => 0,
    };
    println!("{}", page.render_from(offset));
    Ok(())
}

pub async fn about(
    site: &mut Site,
    source: &dyn ContentSource,
    args: AboutArgs,
    opts: &ViewOptions,
) -> Result<()> {
    site.load_section(SectionId::About, source).await;
    if args.quote {
        site.about.show_quote();
    }
    print_section(site, SectionId::About, opts);
    Ok(())
}

pub async fn degrees(
    site: &mut Site,
    source: &dyn ContentSource,
    args: DegreesArgs,
    opts: &ViewOptions,
) -> Result<()> {
    site.load_section(SectionId::Degrees, source).await;
    site.degrees.set_tab(args.tab);
    if let Some(name) = args.concentration {
        site.degrees.select_concentration(name);
    }
    print_section(site, SectionId::Degrees, opts);
    Ok(())
}

pub async fn employment(
    site: &mut Site,
    source: &dyn ContentSource,
    args: EmploymentArgs,
    opts: &ViewOptions,
) -> Result<()> {
    site.load_section(SectionId::Employment, source).await;
    site.employment.table_mut(TableKind::Employment).pager.set_page(args.page);
    site.employment.table_mut(TableKind::Coop).pager.set_page(args.coop_page);
    print_section(site, SectionId::Employment, opts);
    Ok(())
}

pub async fn faculty(
    site: &mut Site,
    source: &dyn ContentSource,
    args: FacultyArgs,
    opts: &ViewOptions,
) -> Result<()> {
    site.load_section(SectionId::Faculty, source).await;
    site.faculty.set_filter(args.filter);
    if let Some(name) = args.member {
        if !site.faculty.select_by_name(&name) {
            eprintln!("No visible faculty member named '{name}'");
        }
    }
    print_section(site, SectionId::Faculty, opts);
    Ok(())
}

pub async fn news(site: &mut Site, source: &dyn ContentSource, opts: &ViewOptions) -> Result<()> {
    site.load_section(SectionId::News, source).await;
    print_section(site, SectionId::News, opts);
    Ok(())
}

fn print_section(site: &Site, id: SectionId, opts: &ViewOptions) {
    println!("{}", site.render_section(id, opts).join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeSource;
    use ischool_core::{AnchorIndex, ErrorMode};

    #[tokio::test]
    async fn test_goto_offset_matches_anchor() {
        let source = FakeSource::default();
        let mut site = Site::new(ErrorMode::Uniform);
        site.load(&source).await;
        let page = site.compose(&ViewOptions::default());
        let expected = page.offset_of("News");

        site.nav.toggle(true);
        assert_eq!(site.nav.navigate_to("News", &page), expected);
        assert!(!site.nav.is_open());
    }

    #[tokio::test]
    async fn test_employment_pages_are_clamped() {
        let source = FakeSource::default();
        let mut site = Site::new(ErrorMode::Uniform);
        employment(
            &mut site,
            &source,
            EmploymentArgs {
                page: 9,
                coop_page: 1,
            },
            &ViewOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(site.employment.employment.pager.current_page(), 3);
        assert_eq!(source.calls(), 2);
    }
}
