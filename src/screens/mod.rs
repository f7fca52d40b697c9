//! Per-entity screen state
//!
//! An [`EntityScreen`] is the state one management screen owns while it is
//! open: the fetched rows, the table view state, the create/edit form and
//! the last notice shown to the user. Nothing is shared between screens.
//!
//! Failures are surfaced as a [`Notice`] and returned to the caller; the
//! screen never retries on its own.

pub mod catalog;

pub use catalog::{SCREEN_PAGE_SIZE, ScreenResource, ScreenSpec, SortOption, catalog};

use crate::config::ConsoleConfig;
use crate::core::error::{ApiError, ConsoleError};
use crate::core::record::Row;
use crate::core::validation::{Validate, normalize};
use crate::entities::{Operation, Resource};
use crate::storage::{ResourceStore, ensure_supported};
use crate::table::{TableState, TableView};

/// Severity of a [`Notice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Create/edit form of a screen
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<P> {
    pub open: bool,
    /// Id of the record being edited, `None` when creating
    pub editing: Option<i64>,
    /// Prefilled values
    pub draft: P,
}

impl<P: Default> Default for FormState<P> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            draft: P::default(),
        }
    }
}

/// State of one entity management screen
pub struct EntityScreen<T: Resource, S> {
    spec: ScreenSpec,
    store: S,
    rows: Vec<Row<T>>,
    table: TableState,
    form: FormState<T::Payload>,
    notice: Option<Notice>,
}

impl<T, S> EntityScreen<T, S>
where
    T: ScreenResource,
    S: ResourceStore<T>,
{
    /// Open a screen with its built-in layout
    pub fn new(store: S) -> Self {
        Self::with_table(store, TableState::new(T::SCREEN.table_config(None)))
    }

    /// Open a screen with the configured overrides for its resource
    pub fn with_config(store: S, config: &ConsoleConfig) -> Self {
        let overrides = config.screen_override(T::PATH);
        Self::with_table(store, TableState::new(T::SCREEN.table_config(overrides)))
    }

    fn with_table(store: S, table: TableState) -> Self {
        Self {
            spec: T::SCREEN,
            store,
            rows: Vec::new(),
            table,
            form: FormState::default(),
            notice: None,
        }
    }

    pub fn spec(&self) -> &ScreenSpec {
        &self.spec
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// View state, for the search box, sort selector and page controls
    pub fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    /// Every fetched record, in backend order
    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(Row::entity)
    }

    pub fn form(&self) -> &FormState<T::Payload> {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Current page of the table
    pub fn view(&self) -> TableView<'_, Row<T>> {
        self.table.view(&self.rows)
    }

    /// Re-fetch the collection
    ///
    /// View state is kept, so a refresh after an edit stays on the same
    /// search and sort.
    pub async fn refresh(&mut self) -> Result<usize, ConsoleError> {
        let records = match self.store.list().await {
            Ok(records) => records,
            Err(e) => return Err(self.fail(format!("Failed to load {}", T::PATH), e.into())),
        };

        let rows = records
            .into_iter()
            .map(Row::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConsoleError::Internal(format!("failed to project record: {}", e)))?;

        tracing::debug!(resource = T::PATH, count = rows.len(), "screen refreshed");
        self.rows = rows;
        Ok(self.rows.len())
    }

    /// Open an empty form
    pub fn open_create(&mut self) {
        self.form = FormState {
            open: true,
            editing: None,
            draft: T::Payload::default(),
        };
    }

    /// Open the form prefilled with a loaded record
    pub fn open_edit(&mut self, id: i64) -> Result<(), ConsoleError> {
        if let Err(e) = ensure_supported::<T>(Operation::Update) {
            return Err(self.fail(format!("Cannot edit {}", T::SINGULAR), e.into()));
        }
        let draft = self
            .records()
            .find(|r| r.id() == Some(id))
            .map(Resource::to_payload);
        let Some(draft) = draft else {
            let err = ApiError::NotFound {
                resource: T::SINGULAR,
                id,
            };
            return Err(self.fail(format!("Cannot edit {}", T::SINGULAR), err.into()));
        };

        self.form = FormState {
            open: true,
            editing: Some(id),
            draft,
        };
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form = FormState::default();
    }

    /// Save a form payload
    ///
    /// The payload is trimmed and validated, then created or updated
    /// depending on how the form was opened. On success the collection is
    /// refreshed and the form closed; on failure the form stays open.
    pub async fn submit(&mut self, payload: T::Payload) -> Result<T, ConsoleError> {
        let payload = match normalize(&payload).and_then(|p| p.validate().map(|_| p)) {
            Ok(payload) => payload,
            Err(e) => {
                self.form.draft = payload;
                return Err(self.fail("Please fill in all required fields", e.into()));
            }
        };

        let saved = match self.form.editing {
            Some(id) => self.store.update(id, &payload).await,
            None => self.store.create(&payload).await,
        };
        let saved = match saved {
            Ok(record) => record,
            Err(e) => {
                self.form.draft = payload;
                return Err(self.fail(format!("Failed to save {}", T::SINGULAR), e.into()));
            }
        };

        tracing::info!(resource = T::PATH, id = ?saved.id(), "record saved");
        self.close_form();
        self.refresh().await?;
        self.notice = Some(Notice::info(format!("The {} was saved", T::SINGULAR)));
        Ok(saved)
    }

    /// Delete a record and refresh
    pub async fn delete(&mut self, id: i64) -> Result<(), ConsoleError> {
        if let Err(e) = self.store.delete(id).await {
            return Err(self.fail(format!("Failed to delete {}", T::SINGULAR), e.into()));
        }

        tracing::info!(resource = T::PATH, id, "record deleted");
        self.refresh().await?;
        self.notice = Some(Notice::info(format!("The {} was deleted", T::SINGULAR)));
        Ok(())
    }

    fn fail(&mut self, context: impl Into<String>, error: ConsoleError) -> ConsoleError {
        let context = context.into();
        tracing::warn!(resource = T::PATH, error = %error, "{}", context);
        self.notice = Some(Notice::error(format!("{}: {}", context, error)));
        error
    }
}
