mod fetch;
mod page;

use digest_core::{load_dashboard, LoadEvent, LoadState, RenderedView, Sources};
use wasm_bindgen_futures::spawn_local;

use crate::fetch::{fetch_json, js_message};
use crate::page::Page;

fn main() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(page) = window.document().as_ref().and_then(Page::attach) else {
        web_sys::console::error_1(&"companyGrid or macroGrid container is missing".into());
        return;
    };

    spawn_local(async move {
        let mut state = LoadState::Empty;
        advance(&mut state, LoadEvent::Start);
        page.mount(&RenderedView::loading());

        let sources = Sources::default();
        let outcome = load_dashboard(&sources, |location| {
            fetch_json(window.clone(), location.clone())
        })
        .await;
        page.mount(&RenderedView::from_outcome(&outcome));

        let result = match &outcome {
            Ok(_) => page.bind().map_err(|error| js_message(&error)),
            Err(error) => Err(error.to_string()),
        };

        match result {
            Ok(()) => advance(&mut state, LoadEvent::Succeeded),
            Err(message) => {
                if outcome.is_ok() {
                    page.mount(&RenderedView::error());
                }
                web_sys::console::error_1(&format!("Failed to load digest data: {message}").into());
                advance(&mut state, LoadEvent::Failed);
            }
        }
    });
}

fn advance(state: &mut LoadState, event: LoadEvent) {
    match state.advance(event) {
        Ok(next) => *state = next,
        Err(error) => web_sys::console::error_1(&error.to_string().into()),
    }
}
