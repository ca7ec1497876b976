//! Per-section view models
//!
//! Each view model owns its section's fetched data and the UI state derived
//! from it. Nothing is shared between sections.

pub mod about;
pub mod degrees;
pub mod employment;
pub mod faculty;
pub mod news;

pub use about::AboutSection;
pub use degrees::{DegreeSection, DegreeTab};
pub use employment::{EmploymentSection, PagedTable, TableKind};
pub use faculty::FacultySection;
pub use news::NewsSection;
