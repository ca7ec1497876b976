//! iSchool Core - Content types, section state and presentation controllers
//!
//! This crate holds everything the site needs that is independent of the
//! network and of the terminal: the API payload types, the per-section
//! fetch lifecycle, and the pagination/filter/selection/navigation state
//! that the views read from.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod filter;
pub mod navigation;
pub mod pagination;
pub mod section;
pub mod sections;
pub mod selection;
pub mod source;
pub mod types;

pub use error::{ErrorKind, IschoolError, Result};
pub use filter::{FilterKey, LetterFilter, Named};
pub use navigation::{AnchorIndex, NavigationController, SectionId};
pub use pagination::{Paginator, PAGE_SIZE};
pub use section::{ErrorMode, ErrorPolicy, FetchTicket, Section, SectionState};
pub use selection::{DismissBehavior, Selection};
pub use source::{ContentSource, Endpoint};
pub use types::*;
