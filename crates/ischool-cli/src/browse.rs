//! Interactive browsing: one event at a time, re-render after each

use std::str::FromStr;

use anyhow::Result;
use ischool_core::sections::{DegreeTab, TableKind};
use ischool_core::{ContentSource, FilterKey, IschoolError, SectionId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::site::Site;
use crate::views::{self, ViewOptions};

pub const HELP: &str = "\
Commands:
  menu | close-menu            open or close the navigation drawer
  goto <section>               jump to About, Degrees, Employment, Faculty or News
  next|prev employment|coop    turn a table page
  tab undergraduate|graduate   switch degree tab
  concentration <name>         show concentration details
  filter <All|A-Z>             filter faculty by first letter
  member <name>                show a faculty member
  quote                        show the About quote
  dismiss                      close any open detail view
  reload <section>             fetch a section again
  help                         show this text
  quit                         leave";

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Menu(bool),
    Goto(String),
    Page { table: TableKind, forward: bool },
    Tab(DegreeTab),
    Concentration(String),
    Filter(FilterKey),
    Member(String),
    Quote,
    Dismiss,
    Reload(SectionId),
    Help,
    Quit,
}

fn required<'a>(arg: &'a str, what: &str) -> Result<&'a str, IschoolError> {
    if arg.is_empty() {
        Err(IschoolError::InvalidInput(format!("missing {what}")))
    } else {
        Ok(arg)
    }
}

impl FromStr for Event {
    type Err = IschoolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();

        match command.to_lowercase().as_str() {
            "menu" => Ok(Event::Menu(true)),
            "close-menu" => Ok(Event::Menu(false)),
            // Unknown anchors are passed through; navigation ignores them.
            "goto" => Ok(Event::Goto(required(arg, "section")?.to_string())),
            "next" | "prev" => Ok(Event::Page {
                table: required(arg, "table")?.parse()?,
                forward: command.eq_ignore_ascii_case("next"),
            }),
            "tab" => Ok(Event::Tab(required(arg, "tab")?.parse()?)),
            "concentration" => Ok(Event::Concentration(
                required(arg, "concentration")?.to_string(),
            )),
            "filter" => Ok(Event::Filter(required(arg, "filter")?.parse()?)),
            "member" => Ok(Event::Member(required(arg, "member name")?.to_string())),
            "quote" => Ok(Event::Quote),
            "dismiss" | "close" => Ok(Event::Dismiss),
            "reload" => Ok(Event::Reload(required(arg, "section")?.parse()?)),
            "help" | "?" => Ok(Event::Help),
            "quit" | "exit" | "q" => Ok(Event::Quit),
            other => Err(IschoolError::InvalidInput(format!(
                "unknown command '{other}', try 'help'"
            ))),
        }
    }
}

/// Browsing session: the site plus the current scroll position
pub struct Session {
    pub site: Site,
    pub scroll: usize,
    pub opts: ViewOptions,
}

/// What the loop should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Message(String),
    Quit,
}

impl Session {
    pub fn new(site: Site, opts: ViewOptions) -> Self {
        Self {
            site,
            scroll: 0,
            opts,
        }
    }

    /// Apply one event. Only the section that owns the event is touched.
    pub async fn apply(&mut self, event: Event, source: &dyn ContentSource) -> Outcome {
        debug!(?event, "Applying event");
        match event {
            Event::Menu(open) => self.site.nav.toggle(open),
            Event::Goto(anchor) => {
                let page = self.site.compose(&self.opts);
                if let Some(offset) = self.site.nav.navigate_to(&anchor, &page) {
                    self.scroll = offset;
                }
            }
            Event::Page { table, forward } => {
                let pager = &mut self.site.employment.table_mut(table).pager;
                if forward {
                    pager.next();
                } else {
                    pager.prev();
                }
            }
            Event::Tab(tab) => self.site.degrees.set_tab(tab),
            Event::Concentration(name) => {
                if !self.site.degrees.select_concentration(name) {
                    return Outcome::Message("Degrees are not loaded yet.".to_string());
                }
            }
            Event::Filter(key) => self.site.faculty.set_filter(key),
            Event::Member(name) => {
                if !self.site.faculty.select_by_name(&name) {
                    return Outcome::Message(format!("No visible faculty member named '{name}'."));
                }
            }
            Event::Quote => {
                if !self.site.about.show_quote() {
                    return Outcome::Message("About text is not loaded yet.".to_string());
                }
            }
            Event::Dismiss => self.site.dismiss_all(),
            Event::Reload(id) => self.site.reload(id, source).await,
            Event::Help => return Outcome::Message(HELP.to_string()),
            Event::Quit => return Outcome::Quit,
        }
        Outcome::Render
    }

    /// Drawer (if open) over the page scrolled to the current position
    pub fn render(&self) -> String {
        let mut lines = views::nav::render_drawer(&self.site.nav);
        lines.push(self.site.compose(&self.opts).render_from(self.scroll));
        lines.join("\n")
    }
}

/// Read events from stdin until `quit` or end of input
pub async fn run(mut session: Session, source: &dyn ContentSource) -> Result<()> {
    println!("{}", session.render());
    println!("\n{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let event = match line.parse::<Event>() {
            Ok(event) => event,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match session.apply(event, source).await {
            Outcome::Render => println!("{}", session.render()),
            Outcome::Message(message) => println!("{message}"),
            Outcome::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeSource;
    use ischool_core::ErrorMode;

    async fn session() -> (Session, FakeSource) {
        let source = FakeSource::default();
        let mut site = Site::new(ErrorMode::Uniform);
        site.load(&source).await;
        (Session::new(site, ViewOptions::default()), source)
    }

    #[test]
    fn test_parse_events() {
        assert_eq!("menu".parse::<Event>().unwrap(), Event::Menu(true));
        assert_eq!(
            "next coop".parse::<Event>().unwrap(),
            Event::Page {
                table: TableKind::Coop,
                forward: true
            }
        );
        assert_eq!(
            "filter b".parse::<Event>().unwrap(),
            Event::Filter(FilterKey::Letter('B'))
        );
        assert_eq!(
            "member Bob Smith".parse::<Event>().unwrap(),
            Event::Member("Bob Smith".to_string())
        );
        assert_eq!(
            "reload news".parse::<Event>().unwrap(),
            Event::Reload(SectionId::News)
        );
        assert!("next".parse::<Event>().is_err());
        assert!("dance".parse::<Event>().is_err());
        assert!("filter 12".parse::<Event>().is_err());
    }

    #[tokio::test]
    async fn test_goto_scrolls_and_closes_menu() {
        let (mut session, source) = session().await;
        session.apply(Event::Menu(true), &source).await;
        assert!(session.site.nav.is_open());

        session.apply(Event::Goto("Faculty".to_string()), &source).await;
        assert!(!session.site.nav.is_open());
        assert!(session.render().starts_with("Faculty Information"));
    }

    #[tokio::test]
    async fn test_goto_unknown_section_keeps_scroll() {
        let (mut session, source) = session().await;
        session.apply(Event::Goto("News".to_string()), &source).await;
        let scroll = session.scroll;
        session.apply(Event::Goto("Contact".to_string()), &source).await;
        assert_eq!(session.scroll, scroll);
    }

    #[tokio::test]
    async fn test_paging_touches_one_table_without_fetching() {
        let (mut session, source) = session().await;
        let calls = source.calls();

        session
            .apply(
                Event::Page {
                    table: TableKind::Employment,
                    forward: true,
                },
                &source,
            )
            .await;
        assert_eq!(session.site.employment.employment.pager.current_page(), 2);
        assert_eq!(session.site.employment.coop.pager.current_page(), 1);
        assert_eq!(source.calls(), calls);
    }

    #[tokio::test]
    async fn test_overlays_and_dismiss() {
        let (mut session, source) = session().await;
        assert_eq!(session.apply(Event::Quote, &source).await, Outcome::Render);
        assert_eq!(
            session.apply(Event::Member("Alice".to_string()), &source).await,
            Outcome::Render
        );
        assert!(session.site.about.quote.is_open());
        assert!(session.site.faculty.member.is_open());

        session.apply(Event::Dismiss, &source).await;
        assert!(!session.site.about.quote.is_open());
        assert!(session.site.faculty.member.selected().is_none());
    }

    #[tokio::test]
    async fn test_unknown_member_reports_message() {
        let (mut session, source) = session().await;
        let outcome = session
            .apply(Event::Member("Nobody".to_string()), &source)
            .await;
        assert!(matches!(outcome, Outcome::Message(_)));
    }

    #[tokio::test]
    async fn test_reload_refetches_one_section() {
        let (mut session, source) = session().await;
        let calls = source.calls();
        session.apply(Event::Reload(SectionId::News), &source).await;
        assert_eq!(source.calls(), calls + 1);
    }
}
