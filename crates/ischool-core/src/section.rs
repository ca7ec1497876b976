//! Fetch lifecycle of one content section
//!
//! Every section goes `Loading -> Loaded | Errored` after a single fetch.
//! Each fetch is tagged with a ticket; a completion is only applied when its
//! ticket is still the newest one, so a slow response can never overwrite a
//! newer one.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::IschoolError;
use crate::navigation::SectionId;

/// Displayable state of a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Loaded(T),
    Errored(String),
}

impl<T> SectionState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            SectionState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SectionState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// How a failed fetch is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Failure becomes `Errored(message)`
    Surface,
    /// Failure becomes `Loaded` with an empty payload
    Mask,
}

/// Site-wide choice of error surfacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Every section surfaces failures
    #[default]
    Uniform,
    /// Only Degrees and Faculty surface failures
    Legacy,
}

impl ErrorMode {
    pub fn policy_for(self, id: SectionId) -> ErrorPolicy {
        match (self, id) {
            (ErrorMode::Uniform, _) => ErrorPolicy::Surface,
            (ErrorMode::Legacy, SectionId::Degrees | SectionId::Faculty) => ErrorPolicy::Surface,
            (ErrorMode::Legacy, _) => ErrorPolicy::Mask,
        }
    }
}

/// Correlates a completion with the request that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// State owned by one section
#[derive(Debug, Clone)]
pub struct Section<T> {
    name: &'static str,
    policy: ErrorPolicy,
    state: SectionState<T>,
    mounted: bool,
    issued: u64,
    pending: Option<FetchTicket>,
}

impl<T: Default> Section<T> {
    pub fn new(name: &'static str, policy: ErrorPolicy) -> Self {
        Self {
            name,
            policy,
            state: SectionState::Loading,
            mounted: false,
            issued: 0,
            pending: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn state(&self) -> &SectionState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// First mount issues the one and only fetch ticket
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.issue())
    }

    /// Start a fresh fetch, superseding any in-flight one
    pub fn reload(&mut self) -> FetchTicket {
        self.mounted = true;
        self.state = SectionState::Loading;
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        self.pending = Some(ticket);
        debug!(section = self.name, ticket = ticket.0, "Fetch issued");
        ticket
    }

    /// Apply the outcome of the fetch tagged `ticket`.
    ///
    /// Returns `false` when the ticket has been superseded and the result was dropped.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, IschoolError>) -> bool {
        if self.pending != Some(ticket) {
            debug!(section = self.name, ticket = ticket.0, "Discarding stale response");
            return false;
        }
        self.pending = None;

        self.state = match result {
            Ok(data) => {
                info!(section = self.name, "Section loaded");
                SectionState::Loaded(data)
            }
            Err(e) => {
                warn!(section = self.name, error = %e, "Section fetch failed");
                match self.policy {
                    ErrorPolicy::Surface => SectionState::Errored(e.to_string()),
                    ErrorPolicy::Mask => SectionState::Loaded(T::default()),
                }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> IschoolError {
        IschoolError::Network("connection refused".to_string())
    }

    #[test]
    fn test_mount_issues_once() {
        let mut section: Section<Vec<u8>> = Section::new("news", ErrorPolicy::Surface);
        assert!(section.state().is_loading());
        assert!(section.mount().is_some());
        assert!(section.mount().is_none());
    }

    #[test]
    fn test_success_stores_payload() {
        let mut section = Section::new("news", ErrorPolicy::Surface);
        let ticket = section.mount().unwrap();
        assert!(section.complete(ticket, Ok(vec![1, 2, 3])));
        assert_eq!(section.data(), Some(&vec![1, 2, 3]));
        assert!(!section.is_pending());
    }

    #[test]
    fn test_surface_policy_errors() {
        let mut section: Section<Vec<u8>> = Section::new("faculty", ErrorPolicy::Surface);
        let ticket = section.mount().unwrap();
        section.complete(ticket, Err(network()));
        assert_eq!(
            section.state().error(),
            Some("Network error: connection refused")
        );
    }

    #[test]
    fn test_mask_policy_loads_default() {
        let mut section: Section<Vec<u8>> = Section::new("about", ErrorPolicy::Mask);
        let ticket = section.mount().unwrap();
        section.complete(ticket, Err(network()));
        assert_eq!(section.state(), &SectionState::Loaded(Vec::new()));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut section = Section::new("employment", ErrorPolicy::Surface);
        let first = section.mount().unwrap();
        let second = section.reload();

        assert!(section.complete(second, Ok(vec![2])));
        assert!(!section.complete(first, Ok(vec![1])));
        assert_eq!(section.data(), Some(&vec![2]));
    }

    #[test]
    fn test_duplicate_completion_is_dropped() {
        let mut section = Section::new("news", ErrorPolicy::Surface);
        let ticket = section.mount().unwrap();
        assert!(section.complete(ticket, Ok(vec![1])));
        assert!(!section.complete(ticket, Ok(vec![9])));
        assert_eq!(section.data(), Some(&vec![1]));
    }

    #[test]
    fn test_legacy_policies() {
        assert_eq!(ErrorMode::Legacy.policy_for(SectionId::Faculty), ErrorPolicy::Surface);
        assert_eq!(ErrorMode::Legacy.policy_for(SectionId::Degrees), ErrorPolicy::Surface);
        assert_eq!(ErrorMode::Legacy.policy_for(SectionId::News), ErrorPolicy::Mask);
        assert_eq!(ErrorMode::Uniform.policy_for(SectionId::News), ErrorPolicy::Surface);
    }
}
