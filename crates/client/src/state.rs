//! Catalog screen state and its transitions.
//!
//! All UI state lives in one immutable [`CatalogState`] value. User input and
//! fetch completions arrive as [`CatalogMsg`]s; [`Reducer::reduce`] returns the
//! next state plus the [`CatalogEffect`]s a driver must carry out.
//!
//! Superseded requests follow a cancel-and-ignore policy: a source change asks
//! the driver to cancel the in-flight fetch, and any completion that still
//! arrives for it is dropped because its [`RequestId`] no longer matches.

use chrono::{DateTime, Utc};

use shelf_catalog::{Catalog, FilterState, Product, ProductFilter, group_by_tags};
use shelf_core::{Reducer, RequestId};

use crate::types::{CatalogSource, LoadError, LoadState};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogMsg {
    /// Switch to a new data source and fetch it.
    SourceChanged(CatalogSource),
    /// Fetch the current source again.
    Reload,
    FetchSucceeded {
        id: RequestId,
        products: Vec<Product>,
        fetched_at: DateTime<Utc>,
    },
    FetchFailed {
        id: RequestId,
        error: LoadError,
    },
    FilterTextChanged(String),
    InStockOnlyToggled,
    InStockOnlySet(bool),
}

impl CatalogMsg {
    /// Request a completion message belongs to, if any.
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            CatalogMsg::FetchSucceeded { id, .. } | CatalogMsg::FetchFailed { id, .. } => Some(*id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEffect {
    Fetch { id: RequestId, source: CatalogSource },
    Cancel(RequestId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    source: Option<CatalogSource>,
    load: LoadState,
    /// Last successfully loaded catalog; survives later failures.
    catalog: Option<Catalog>,
    loaded_at: Option<DateTime<Utc>>,
    filter: FilterState,
    in_flight: Option<RequestId>,
    last_request: RequestId,
}

impl CatalogState {
    pub fn source(&self) -> Option<&CatalogSource> {
        self.source.as_ref()
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// `None` until something has loaded successfully.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn predicate(&self) -> ProductFilter {
        self.filter.predicate()
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.load.error()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// True when a completion for `id` must be ignored.
    pub fn is_stale(&self, id: RequestId) -> bool {
        self.in_flight != Some(id)
    }

    fn start_fetch(&self, source: CatalogSource) -> (Self, Vec<CatalogEffect>) {
        let id = self.last_request.next();

        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = self.in_flight {
            effects.push(CatalogEffect::Cancel(previous));
        }
        effects.push(CatalogEffect::Fetch {
            id,
            source: source.clone(),
        });

        let next = Self {
            source: Some(source),
            load: LoadState::Loading,
            in_flight: Some(id),
            last_request: id,
            ..self.clone()
        };
        (next, effects)
    }
}

impl Reducer for CatalogState {
    type Msg = CatalogMsg;
    type Effect = CatalogEffect;

    fn reduce(&self, msg: CatalogMsg) -> (Self, Vec<CatalogEffect>) {
        match msg {
            CatalogMsg::SourceChanged(source) => self.start_fetch(source),
            CatalogMsg::Reload => match &self.source {
                Some(source) => self.start_fetch(source.clone()),
                None => (self.clone(), Vec::new()),
            },
            CatalogMsg::FetchSucceeded { id, .. } | CatalogMsg::FetchFailed { id, .. }
                if self.is_stale(id) =>
            {
                (self.clone(), Vec::new())
            }
            CatalogMsg::FetchSucceeded {
                products,
                fetched_at,
                ..
            } => {
                let catalog = group_by_tags(Some(&products)).unwrap_or_default();
                let next = Self {
                    load: LoadState::Loaded(catalog.clone()),
                    catalog: Some(catalog),
                    loaded_at: Some(fetched_at),
                    in_flight: None,
                    ..self.clone()
                };
                (next, Vec::new())
            }
            CatalogMsg::FetchFailed { error, .. } => {
                let next = Self {
                    load: LoadState::Failed(error),
                    in_flight: None,
                    ..self.clone()
                };
                (next, Vec::new())
            }
            CatalogMsg::FilterTextChanged(text) => {
                let next = Self {
                    filter: self.filter.with_text(text),
                    ..self.clone()
                };
                (next, Vec::new())
            }
            CatalogMsg::InStockOnlyToggled => {
                let next = Self {
                    filter: self.filter.toggled_in_stock_only(),
                    ..self.clone()
                };
                (next, Vec::new())
            }
            CatalogMsg::InStockOnlySet(in_stock_only) => {
                let next = Self {
                    filter: self.filter.with_in_stock_only(in_stock_only),
                    ..self.clone()
                };
                (next, Vec::new())
            }
        }
    }
}
