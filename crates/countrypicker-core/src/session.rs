// crates/countrypicker-core/src/session.rs

//! # Picker Session
//!
//! Toolkit-agnostic model of one picker lifecycle. A rendering layer owns a
//! [`PickerSession`], feeds it keystrokes via [`PickerSession::set_query`],
//! draws [`PickerSession::rows`] and forwards taps to
//! [`PickerSession::select`] or [`PickerSession::dismiss`].
//!
//! ```rust
//! use countrypicker_core::{PickerOptions, PickerSession};
//! use std::cell::RefCell;
//!
//! let picked = RefCell::new(None);
//! let mut session = PickerSession::open(
//!     PickerOptions::new()
//!         .pre_selected("US")
//!         .on_select(|c| *picked.borrow_mut() = Some(c)),
//! );
//!
//! session.set_query("united").unwrap();
//! assert!(session.rows().iter().any(|r| r.selected));
//!
//! session.select("GB").unwrap();
//! assert_eq!(picked.borrow().as_ref().map(|c| c.code()), Some("GB"));
//! assert!(session.is_closed());
//! ```

use crate::catalog::Catalog;
use crate::error::{PickerError, Result};
use crate::model::Country;
use crate::search::filter;
use crate::text::is_blank;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const DEFAULT_TITLE: &str = "Select Country";
pub const DEFAULT_SEARCH_HINT: &str = "Search country...";

type SelectCallback<'a> = Box<dyn FnOnce(Country) + 'a>;
type DismissCallback<'a> = Box<dyn FnOnce() + 'a>;

/// Everything a picker needs before it opens.
///
/// Built with chained setters; every field has a default (built-in catalog,
/// no pre-selection, stock labels, no callbacks).
pub struct PickerOptions<'a> {
    catalog: Catalog,
    pre_selected_code: Option<String>,
    title: String,
    search_hint: String,
    on_select: Option<SelectCallback<'a>>,
    on_dismiss: Option<DismissCallback<'a>>,
}

impl Default for PickerOptions<'_> {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            pre_selected_code: None,
            title: DEFAULT_TITLE.to_owned(),
            search_hint: DEFAULT_SEARCH_HINT.to_owned(),
            on_select: None,
            on_dismiss: None,
        }
    }
}

impl fmt::Debug for PickerOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("countries", &self.catalog.len())
            .field("pre_selected_code", &self.pre_selected_code)
            .field("title", &self.title)
            .field("search_hint", &self.search_hint)
            .finish_non_exhaustive()
    }
}

impl<'a> PickerOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `countries` instead of the built-in catalog.
    pub fn countries(mut self, countries: Vec<Country>) -> Self {
        self.catalog = Catalog::custom(countries);
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Highlight the row whose code equals `code` exactly.
    pub fn pre_selected(mut self, code: impl Into<String>) -> Self {
        self.pre_selected_code = Some(code.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn search_hint(mut self, hint: impl Into<String>) -> Self {
        self.search_hint = hint.into();
        self
    }

    pub fn on_select(mut self, f: impl FnOnce(Country) + 'a) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn on_dismiss(mut self, f: impl FnOnce() + 'a) -> Self {
        self.on_dismiss = Some(Box::new(f));
        self
    }
}

/// Where a session is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerState {
    /// Showing the whole list.
    Open,
    /// A non-blank query narrows the list.
    Searching,
    /// A country was chosen; the session is closed.
    Selected(Country),
    /// Closed without a selection.
    Dismissed,
}

impl PickerState {
    pub fn is_closed(&self) -> bool {
        matches!(self, PickerState::Selected(_) | PickerState::Dismissed)
    }
}

/// One visible row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerRow<'a> {
    pub country: &'a Country,
    /// The row matches the pre-selected code.
    pub selected: bool,
}

/// A single open → (searching) → selected/dismissed lifecycle.
///
/// The selection and dismissal callbacks fire at most once, and only one of
/// them ever fires.
pub struct PickerSession<'a> {
    catalog: Catalog,
    pre_selected_code: Option<String>,
    title: String,
    search_hint: String,
    query: String,
    state: PickerState,
    on_select: Option<SelectCallback<'a>>,
    on_dismiss: Option<DismissCallback<'a>>,
}

impl fmt::Debug for PickerSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSession")
            .field("countries", &self.catalog.len())
            .field("pre_selected_code", &self.pre_selected_code)
            .field("query", &self.query)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a> PickerSession<'a> {
    pub fn open(options: PickerOptions<'a>) -> Self {
        debug!(
            countries = options.catalog.len(),
            pre_selected = ?options.pre_selected_code,
            "picker session opened"
        );
        Self {
            catalog: options.catalog,
            pre_selected_code: options.pre_selected_code,
            title: options.title,
            search_hint: options.search_hint,
            query: String::new(),
            state: PickerState::Open,
            on_select: options.on_select,
            on_dismiss: options.on_dismiss,
        }
    }

    /// Re-open a session from a [`SessionSnapshot`].
    ///
    /// A snapshot taken after a selection restores a closed session without
    /// firing any callback again.
    pub fn restore(options: PickerOptions<'a>, snapshot: SessionSnapshot) -> Self {
        let mut session = Self::open(options);
        if snapshot.pre_selected_code.is_some() {
            session.pre_selected_code = snapshot.pre_selected_code;
        }
        session.state = match snapshot.selected {
            Some(country) => {
                session.on_select = None;
                session.on_dismiss = None;
                PickerState::Selected(country)
            }
            None if is_blank(&snapshot.query) => PickerState::Open,
            None => PickerState::Searching,
        };
        session.query = snapshot.query;
        debug!(state = ?session.state, "picker session restored");
        session
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn search_hint(&self) -> &str {
        &self.search_hint
    }

    pub fn pre_selected_code(&self) -> Option<&str> {
        self.pre_selected_code.as_deref()
    }

    /// The chosen country once the session closed with a selection.
    pub fn selected(&self) -> Option<&Country> {
        match &self.state {
            PickerState::Selected(c) => Some(c),
            _ => None,
        }
    }

    /// Replace the query and re-filter.
    ///
    /// # Errors
    ///
    /// [`PickerError::SessionClosed`] once the session is closed.
    pub fn set_query(&mut self, query: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.query = query.into();
        self.state = if is_blank(&self.query) {
            PickerState::Open
        } else {
            PickerState::Searching
        };
        Ok(())
    }

    /// Same as `set_query("")`.
    ///
    /// # Errors
    ///
    /// [`PickerError::SessionClosed`] once the session is closed.
    pub fn clear_query(&mut self) -> Result<()> {
        self.set_query(String::new())
    }

    /// Countries matching the current query, in list order.
    pub fn visible(&self) -> Vec<&Country> {
        filter(self.catalog.countries(), &self.query)
    }

    /// Visible countries with their highlight flag.
    pub fn rows(&self) -> Vec<PickerRow<'_>> {
        self.visible()
            .into_iter()
            .map(|country| PickerRow {
                country,
                selected: self.is_pre_selected(country),
            })
            .collect()
    }

    /// The pre-selected country, if its code exists in the list at all.
    pub fn pre_selected(&self) -> Option<&Country> {
        self.catalog
            .countries()
            .iter()
            .find(|c| self.is_pre_selected(c))
    }

    /// Index of the pre-selected country among the visible rows.
    pub fn pre_selected_position(&self) -> Option<usize> {
        self.visible().iter().position(|c| self.is_pre_selected(c))
    }

    fn is_pre_selected(&self, country: &Country) -> bool {
        self.pre_selected_code.as_deref() == Some(country.code())
    }

    /// Choose the visible country with exactly this code.
    ///
    /// # Errors
    ///
    /// [`PickerError::SessionClosed`] once the session is closed,
    /// [`PickerError::NotFound`] when no visible row carries `code`.
    pub fn select(&mut self, code: &str) -> Result<Country> {
        self.ensure_open()?;
        let country = self
            .visible()
            .into_iter()
            .find(|c| c.code() == code)
            .cloned()
            .ok_or_else(|| PickerError::NotFound(format!("no visible country with code {code}")))?;
        Ok(self.finish_with(country))
    }

    /// Choose the visible row at `index`.
    ///
    /// # Errors
    ///
    /// [`PickerError::SessionClosed`] once the session is closed,
    /// [`PickerError::NotFound`] when `index` is past the visible rows.
    pub fn select_row(&mut self, index: usize) -> Result<Country> {
        self.ensure_open()?;
        let country = self
            .visible()
            .get(index)
            .map(|c| (*c).clone())
            .ok_or_else(|| PickerError::NotFound(format!("no visible row at index {index}")))?;
        Ok(self.finish_with(country))
    }

    /// Close without selecting.
    ///
    /// # Errors
    ///
    /// [`PickerError::SessionClosed`] once the session is closed.
    pub fn dismiss(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state = PickerState::Dismissed;
        self.on_select = None;
        debug!("picker dismissed");
        if let Some(cb) = self.on_dismiss.take() {
            cb();
        }
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query.clone(),
            pre_selected_code: self.pre_selected_code.clone(),
            selected: self.selected().cloned(),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state.is_closed() {
            Err(PickerError::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn finish_with(&mut self, country: Country) -> Country {
        debug!(code = country.code(), "country selected");
        self.state = PickerState::Selected(country.clone());
        self.on_dismiss = None;
        if let Some(cb) = self.on_select.take() {
            cb(country.clone());
        }
        country
    }
}

/// Ephemeral picker state kept across a host configuration change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub query: String,
    pub pre_selected_code: Option<String>,
    pub selected: Option<Country>,
}

impl SessionSnapshot {
    /// # Errors
    ///
    /// [`PickerError::Bincode`] if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot; the stored country is validated again.
    ///
    /// # Errors
    ///
    /// [`PickerError::Bincode`] for malformed bytes or an invalid country.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn two() -> Vec<Country> {
        vec![
            Country::new("United States", "US", "🇺🇸", "+1").unwrap(),
            Country::new("India", "IN", "🇮🇳", "+91").unwrap(),
        ]
    }

    #[test]
    fn opens_with_builtin_and_defaults() {
        let s = PickerSession::open(PickerOptions::new());
        assert_eq!(s.state(), &PickerState::Open);
        assert!(s.catalog().is_builtin());
        assert_eq!(s.title(), DEFAULT_TITLE);
        assert_eq!(s.search_hint(), DEFAULT_SEARCH_HINT);
        assert_eq!(s.rows().len(), crate::all_countries().len());
    }

    #[test]
    fn custom_list_with_unknown_pre_selection_highlights_nothing() {
        let s = PickerSession::open(PickerOptions::new().countries(two()).pre_selected("GB"));
        let rows = s.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.selected));
        assert_eq!(s.pre_selected_position(), None);
        assert!(s.pre_selected().is_none());
    }

    #[test]
    fn pre_selection_is_exact_and_case_sensitive() {
        let s = PickerSession::open(PickerOptions::new().countries(two()).pre_selected("IN"));
        let flags: Vec<bool> = s.rows().iter().map(|r| r.selected).collect();
        assert_eq!(flags, [false, true]);
        assert_eq!(s.pre_selected_position(), Some(1));

        let lower = PickerSession::open(PickerOptions::new().countries(two()).pre_selected("in"));
        assert!(lower.rows().iter().all(|r| !r.selected));
    }

    #[test]
    fn query_moves_between_open_and_searching() {
        let mut s = PickerSession::open(PickerOptions::new().countries(two()));
        s.set_query("ind").unwrap();
        assert_eq!(s.state(), &PickerState::Searching);
        assert_eq!(s.visible().len(), 1);
        s.set_query("  ").unwrap();
        assert_eq!(s.state(), &PickerState::Open);
        assert_eq!(s.visible().len(), 2);
        s.set_query("x").unwrap();
        s.clear_query().unwrap();
        assert_eq!(s.query(), "");
    }

    #[test]
    fn select_fires_callback_once_and_closes() {
        let calls = Cell::new(0);
        let dismissed = Cell::new(false);
        let picked = RefCell::new(None);
        let mut s = PickerSession::open(
            PickerOptions::new()
                .countries(two())
                .on_select(|c| {
                    calls.set(calls.get() + 1);
                    *picked.borrow_mut() = Some(c);
                })
                .on_dismiss(|| dismissed.set(true)),
        );

        let chosen = s.select("IN").unwrap();
        assert_eq!(chosen.code(), "IN");
        assert!(s.is_closed());
        assert_eq!(s.selected(), Some(&chosen));

        assert!(matches!(s.select("US"), Err(PickerError::SessionClosed)));
        assert!(matches!(s.dismiss(), Err(PickerError::SessionClosed)));
        assert!(matches!(s.set_query("a"), Err(PickerError::SessionClosed)));
        drop(s);

        assert_eq!(calls.get(), 1);
        assert!(!dismissed.get());
        assert_eq!(picked.into_inner(), Some(chosen));
    }

    #[test]
    fn only_visible_rows_are_selectable() {
        let mut s = PickerSession::open(PickerOptions::new().countries(two()));
        s.set_query("india").unwrap();
        assert!(matches!(s.select("US"), Err(PickerError::NotFound(_))));
        assert!(matches!(s.select_row(1), Err(PickerError::NotFound(_))));
        assert!(!s.is_closed());
        assert_eq!(s.select_row(0).unwrap().code(), "IN");
    }

    #[test]
    fn dismiss_fires_once_without_selection() {
        let dismissals = Cell::new(0);
        let selected = Cell::new(false);
        let mut s = PickerSession::open(
            PickerOptions::new()
                .countries(two())
                .on_select(|_| selected.set(true))
                .on_dismiss(|| dismissals.set(dismissals.get() + 1)),
        );
        s.dismiss().unwrap();
        assert_eq!(s.state(), &PickerState::Dismissed);
        assert!(s.dismiss().is_err());
        assert!(s.select("US").is_err());
        drop(s);
        assert_eq!(dismissals.get(), 1);
        assert!(!selected.get());
    }

    #[test]
    fn snapshot_round_trip_restores_state() {
        let mut s = PickerSession::open(PickerOptions::new().countries(two()).pre_selected("US"));
        s.set_query("ind").unwrap();
        let bytes = s.snapshot().to_bytes().unwrap();
        let snap = SessionSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(snap, s.snapshot());

        let restored = PickerSession::restore(PickerOptions::new().countries(two()), snap);
        assert_eq!(restored.state(), &PickerState::Searching);
        assert_eq!(restored.query(), "ind");
        assert_eq!(restored.pre_selected_code(), Some("US"));
    }

    #[test]
    fn restoring_a_selection_does_not_fire_again() {
        let mut s = PickerSession::open(PickerOptions::new().countries(two()));
        s.select("US").unwrap();
        let snap = s.snapshot();

        let fired = Cell::new(false);
        let restored = PickerSession::restore(
            PickerOptions::new().countries(two()).on_select(|_| fired.set(true)),
            snap,
        );
        assert_eq!(restored.selected().map(Country::code), Some("US"));
        assert!(restored.is_closed());
        drop(restored);
        assert!(!fired.get());
    }

    #[test]
    fn snapshot_with_invalid_country_is_rejected() {
        #[derive(Serialize)]
        struct Forged {
            query: String,
            pre_selected_code: Option<String>,
            selected: Option<(String, String, String, String)>,
        }
        let forged = Forged {
            query: String::new(),
            pre_selected_code: None,
            selected: Some(("United States".into(), "USA".into(), "🇺🇸".into(), "+1".into())),
        };
        let bytes = bincode::serialize(&forged).unwrap();
        assert!(matches!(
            SessionSnapshot::from_bytes(&bytes),
            Err(PickerError::Bincode(_))
        ));
    }
}
