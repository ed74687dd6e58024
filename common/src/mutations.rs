//! Create and delete actions of the mapping page.
//!
//! Handlers never touch the rendered table. They return what the user should
//! be told and when the table must be re-fetched, and the page carries that
//! out. The table is always refreshed from the backend, never patched
//! locally.

use std::time::Duration;

use crate::backend::MappingBackend;
use crate::model::MarketId;
use crate::requests::{CreateMappingRequest, DeleteMappingRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message surfaced to the user once a handler finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// When the mappings table has to be fetched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    Immediate,
    /// Best-effort wait for the backend to settle before re-reading.
    After(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// `None` when the user cancelled and nothing needs saying.
    pub notice: Option<Notice>,
    pub refresh: Refresh,
}

impl MutationOutcome {
    fn failed(message: &str) -> Self {
        Self {
            notice: Some(Notice::error(message)),
            refresh: Refresh::None,
        }
    }
}

/// Current values of the create row's two selection controls. Empty means
/// the prompt option is still selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub estation_name: String,
    pub market_id: String,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        !self.estation_name.trim().is_empty() && !self.market_id.trim().is_empty()
    }
}

pub async fn create_mapping<B: MappingBackend>(
    backend: &B,
    selection: &Selection,
    refresh_delay: Duration,
) -> MutationOutcome {
    if !selection.is_complete() {
        return MutationOutcome::failed("Select a market and a store first");
    }

    let request = CreateMappingRequest {
        estation_name: selection.estation_name.clone(),
        market_id: MarketId::new(selection.market_id.clone()),
    };

    match backend.create_mapping(&request).await {
        Ok(()) => MutationOutcome {
            notice: Some(Notice::info(format!(
                "Saved mapping: {} → {}",
                request.estation_name, request.market_id
            ))),
            refresh: Refresh::After(refresh_delay),
        },
        Err(e) => {
            log::warn!("saving mapping for {} failed: {}", request.estation_name, e);
            MutationOutcome::failed("Error saving mapping")
        }
    }
}

/// Deletes the mapping of `store_name` once `confirm` agrees to the prompt
/// it is given.
pub async fn delete_mapping<B, C>(backend: &B, store_name: &str, confirm: C) -> MutationOutcome
where
    B: MappingBackend,
    C: FnOnce(&str) -> bool,
{
    if !confirm(&format!("Delete mapping for {}?", store_name)) {
        return MutationOutcome {
            notice: None,
            refresh: Refresh::None,
        };
    }

    let request = DeleteMappingRequest {
        store_name: store_name.to_string(),
    };

    match backend.delete_mapping(&request).await {
        Ok(()) => MutationOutcome {
            notice: Some(Notice::info("Mapping deleted")),
            refresh: Refresh::Immediate,
        },
        Err(e) => {
            log::warn!("deleting mapping for {} failed: {}", store_name, e);
            MutationOutcome::failed("Delete failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ApiError;
    use crate::model::{Mapping, Market, Store};

    /// In-memory backend that records every call.
    #[derive(Default)]
    struct FakeBackend {
        pub mappings: RefCell<Vec<Mapping>>,
        pub calls: RefCell<Vec<String>>,
        pub fail_with: Option<ApiError>,
    }

    impl FakeBackend {
        fn failing(error: ApiError) -> Self {
            Self {
                fail_with: Some(error),
                ..Default::default()
            }
        }

        fn record(&self, call: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call.to_string());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    impl MappingBackend for FakeBackend {
        async fn stores(&self) -> Result<Vec<Store>, ApiError> {
            self.record("stores")?;
            Ok(vec![])
        }

        async fn markets(&self) -> Result<Vec<Market>, ApiError> {
            self.record("markets")?;
            Ok(vec![])
        }

        async fn current_mappings(&self) -> Result<Vec<Mapping>, ApiError> {
            self.record("current")?;
            Ok(self.mappings.borrow().clone())
        }

        async fn create_mapping(&self, request: &CreateMappingRequest) -> Result<(), ApiError> {
            self.record("create")?;
            let mut mappings = self.mappings.borrow_mut();
            mappings.retain(|m| m.estation_name != request.estation_name);
            mappings.push(Mapping {
                estation_name: request.estation_name.clone(),
                market_id: request.market_id.clone(),
                updated_by: "alice@example.com".into(),
                updated_at: "2026-10-16T09:30:00Z".into(),
            });
            Ok(())
        }

        async fn delete_mapping(&self, request: &DeleteMappingRequest) -> Result<(), ApiError> {
            self.record("delete")?;
            self.mappings
                .borrow_mut()
                .retain(|m| m.estation_name != request.store_name);
            Ok(())
        }
    }

    fn selection(store: &str, market: &str) -> Selection {
        Selection {
            estation_name: store.into(),
            market_id: market.into(),
        }
    }

    const DELAY: Duration = Duration::from_millis(3000);

    #[tokio::test]
    async fn incomplete_selection_makes_no_call() {
        let backend = FakeBackend::default();

        for sel in [selection("", "M1"), selection("S1", ""), selection(" ", " ")] {
            let outcome = create_mapping(&backend, &sel, DELAY).await;
            assert_eq!(outcome.refresh, Refresh::None);
            assert_eq!(outcome.notice.map(|n| n.kind), Some(NoticeKind::Error));
        }

        assert!(backend.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn successful_create_schedules_delayed_refresh() {
        let backend = FakeBackend::default();

        let outcome = create_mapping(&backend, &selection("S1", "M1"), DELAY).await;

        assert_eq!(
            outcome,
            MutationOutcome {
                notice: Some(Notice::info("Saved mapping: S1 → M1")),
                refresh: Refresh::After(DELAY),
            }
        );
        assert_eq!(*backend.calls.borrow(), vec!["create".to_string()]);
    }

    #[tokio::test]
    async fn created_mapping_appears_in_current_set() {
        let backend = FakeBackend::default();

        create_mapping(&backend, &selection("S1", "M1"), DELAY).await;
        let current = backend.current_mappings().await.unwrap();

        assert_eq!(current.len(), 1);
        assert_eq!(current[0].estation_name, "S1");
        assert_eq!(current[0].market_id.as_str(), "M1");
    }

    #[tokio::test]
    async fn failed_create_does_not_refresh() {
        let backend = FakeBackend::failing(ApiError::Status(500));

        let outcome = create_mapping(&backend, &selection("S1", "M1"), DELAY).await;

        assert_eq!(outcome.refresh, Refresh::None);
        assert_eq!(outcome.notice, Some(Notice::error("Error saving mapping")));
    }

    #[tokio::test]
    async fn cancelled_delete_makes_no_call() {
        let backend = FakeBackend::default();
        let mut prompt = String::new();

        let outcome = delete_mapping(&backend, "S1", |question| {
            prompt = question.to_string();
            false
        })
        .await;

        assert_eq!(prompt, "Delete mapping for S1?");
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.refresh, Refresh::None);
        assert!(backend.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_refreshes_immediately() {
        let backend = FakeBackend::default();
        create_mapping(&backend, &selection("S1", "M1"), DELAY).await;
        create_mapping(&backend, &selection("S2", "M1"), DELAY).await;

        let outcome = delete_mapping(&backend, "S1", |_| true).await;
        let current = backend.current_mappings().await.unwrap();

        assert_eq!(outcome.refresh, Refresh::Immediate);
        assert_eq!(outcome.notice, Some(Notice::info("Mapping deleted")));
        assert!(current.iter().all(|m| m.estation_name != "S1"));
        assert_eq!(current.len(), 1);
    }

    #[tokio::test]
    async fn failed_delete_does_not_refresh() {
        let backend = FakeBackend::failing(ApiError::Network("offline".into()));

        let outcome = delete_mapping(&backend, "S1", |_| true).await;

        assert_eq!(outcome.refresh, Refresh::None);
        assert_eq!(outcome.notice, Some(Notice::error("Delete failed")));
        assert_eq!(*backend.calls.borrow(), vec!["delete".to_string()]);
    }
}
