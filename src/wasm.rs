//! WebAssembly bindings.
//!
//! Exposes the generation step to JavaScript. The request and response use
//! the same field names as [`EvolveRequest`] and [`EvolveResponse`].

use crate::api::{EvolveRequest, EvolveResponse};
use wasm_bindgen::prelude::*;

/// Runs one generation.
///
/// ```javascript
/// import { evolve } from 'tsp-evolve';
///
/// let response = evolve({ cities, population_size: 100 });
/// response = evolve({ cities, population: response.population });
/// ```
#[wasm_bindgen(js_name = evolve)]
pub fn evolve_js(request: JsValue) -> Result<JsValue, JsError> {
    let request: EvolveRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|err| JsError::new(&format!("Cannot read request: {err}")))?;

    let response: EvolveResponse = crate::api::evolve(&request)?;

    serde_wasm_bindgen::to_value(&response)
        .map_err(|err| JsError::new(&format!("Cannot write response: {err}")))
}
