use digest_core::FetchError;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

/// One same-origin GET through the browser's `fetch`.
pub async fn fetch_json(window: Window, location: String) -> Result<Value, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(&location, &opts)
        .map_err(|error| transport_error(&location, &error))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| transport_error(&location, &error))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|error| transport_error(&location, &error))?;

    if !response.ok() {
        return Err(FetchError::Status {
            location,
            status: response.status(),
        });
    }

    let body = response
        .json()
        .map_err(|error| parse_error(&location, &error))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|error| parse_error(&location, &error))?;

    serde_wasm_bindgen::from_value::<Value>(json).map_err(|error| FetchError::Parse {
        location,
        message: error.to_string(),
    })
}

fn transport_error(location: &str, error: &JsValue) -> FetchError {
    FetchError::Transport {
        location: location.to_string(),
        message: js_message(error),
    }
}

fn parse_error(location: &str, error: &JsValue) -> FetchError {
    FetchError::Parse {
        location: location.to_string(),
        message: js_message(error),
    }
}

pub fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
