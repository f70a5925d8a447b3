//! countrypicker-wasm — WebAssembly bindings for countrypicker-core
//!
//! This crate exposes a small JS/WASM API on top of `countrypicker-core` so
//! a web front end can render the picker while the catalog, filtering and
//! selection rules stay in Rust.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `get_country_count()`, `get_country_name(code)`
//! - Search helpers returning JSON-serializable objects:
//!   - `search_countries("united" | "+1" | "de")`
//!   - `smart_search("guinea")`
//! - A `CountryPicker` class wrapping one picker session with JS callbacks
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryPicker } from 'countrypicker-wasm';
//!
//! async function main() {
//!   await init();
//!   const picker = new CountryPicker(
//!     "US",                                    // pre-selected code
//!     undefined,                               // custom list (array) or undefined
//!     (country) => console.log("picked", country),
//!     () => console.log("dismissed"),
//!   );
//!   picker.set_query("uni");
//!   render(picker.rows());                     // [{ name, code, flag, dialCode, displayName, selected }]
//!   picker.select("GB");                       // fires the callback once
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The catalog is compiled into the module; no data file is fetched.
//! - Errors surface as thrown JS `Error`s carrying the core error message.
use countrypicker_core::{
    all_countries, filter, Catalog, Country, CountrySearch, PickerOptions, PickerSession,
};
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(
        &format!("✓ countrypicker loaded {} countries", all_countries().len()).into(),
    );
}

/// JS-facing shape of a country.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountryView<'a> {
    name: &'a str,
    code: &'a str,
    flag: &'a str,
    dial_code: &'a str,
    display_name: String,
}

impl<'a> From<&'a Country> for CountryView<'a> {
    fn from(c: &'a Country) -> Self {
        CountryView {
            name: c.name(),
            code: c.code(),
            flag: c.flag(),
            dial_code: c.dial_code(),
            display_name: c.display_name(),
        }
    }
}

#[derive(Serialize)]
struct RowView<'a> {
    #[serde(flatten)]
    country: CountryView<'a>,
    selected: bool,
}

#[derive(Serialize)]
struct HitView<'a> {
    score: i32,
    #[serde(flatten)]
    country: CountryView<'a>,
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> usize {
    all_countries().len()
}

#[wasm_bindgen]
pub fn get_country_name(code: &str) -> Option<String> {
    all_countries()
        .find_by_code_ignore_case(code)
        .map(|c| c.name().to_string())
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search_countries(query: &str) -> Result<JsValue, JsValue> {
    let items: Vec<CountryView<'_>> = filter(all_countries(), query)
        .into_iter()
        .map(CountryView::from)
        .collect();
    to_value(&items).map_err(js_error)
}

#[wasm_bindgen]
pub fn smart_search(query: &str) -> Result<JsValue, JsValue> {
    let items: Vec<HitView<'_>> = all_countries()
        .smart_search(query)
        .into_iter()
        .map(|hit| HitView {
            score: hit.score,
            country: hit.country.into(),
        })
        .collect();
    to_value(&items).map_err(js_error)
}

/* --------------------------------------------------------------------------
   Picker Session
-------------------------------------------------------------------------- */

/// One picker session driven from JavaScript.
#[wasm_bindgen]
pub struct CountryPicker {
    session: PickerSession<'static>,
}

#[wasm_bindgen]
impl CountryPicker {
    /// `countries` is an optional array of `{ name, code, flag, dialCode }`;
    /// `undefined`/`null` selects the built-in catalog.
    #[wasm_bindgen(constructor)]
    pub fn new(
        pre_selected_code: Option<String>,
        countries: JsValue,
        on_select: Function,
        on_dismiss: Option<Function>,
    ) -> Result<CountryPicker, JsValue> {
        let custom: Option<Vec<Country>> =
            serde_wasm_bindgen::from_value(countries).map_err(js_error)?;

        let mut options = PickerOptions::new()
            .catalog(Catalog::from_custom_or_builtin(custom))
            .on_select(move |country| {
                let notified = to_value(&CountryView::from(&country))
                    .map_err(js_error)
                    .and_then(|value| on_select.call1(&JsValue::NULL, &value));
                if let Err(e) = notified {
                    web_sys::console::error_2(&"country selection callback failed".into(), &e);
                }
            });
        if let Some(code) = pre_selected_code {
            options = options.pre_selected(code);
        }
        if let Some(f) = on_dismiss {
            options = options.on_dismiss(move || {
                if let Err(e) = f.call0(&JsValue::NULL) {
                    web_sys::console::error_2(&"dismiss callback failed".into(), &e);
                }
            });
        }

        Ok(CountryPicker {
            session: PickerSession::open(options),
        })
    }

    pub fn set_query(&mut self, query: &str) -> Result<(), JsValue> {
        self.session.set_query(query).map_err(js_error)
    }

    pub fn rows(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<RowView<'_>> = self
            .session
            .rows()
            .into_iter()
            .map(|row| RowView {
                country: row.country.into(),
                selected: row.selected,
            })
            .collect();
        to_value(&rows).map_err(js_error)
    }

    /// Row index to scroll to so the pre-selected country is visible.
    pub fn pre_selected_position(&self) -> Option<usize> {
        self.session.pre_selected_position()
    }

    pub fn select(&mut self, code: &str) -> Result<JsValue, JsValue> {
        let country = self.session.select(code).map_err(js_error)?;
        to_value(&CountryView::from(&country)).map_err(js_error)
    }

    pub fn dismiss(&mut self) -> Result<(), JsValue> {
        self.session.dismiss().map_err(js_error)
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    pub fn title(&self) -> String {
        self.session.title().to_string()
    }

    pub fn search_hint(&self) -> String {
        self.session.search_hint().to_string()
    }
}
