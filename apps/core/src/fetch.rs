use std::future::Future;

use serde_json::Value;

use crate::error::FetchError;

/// Tries each candidate in order and returns the first payload that loads.
///
/// Candidates are attempted one at a time; later ones are never touched once
/// an earlier one succeeds. When every candidate fails the result is
/// [`FetchError::Exhausted`] carrying the last failure, or
/// [`FetchError::NoCandidates`] for an empty list.
///
/// The future returned by `fetch_one` must not borrow the candidate.
pub async fn fetch_first_ok<L, F, Fut, T>(candidates: &[L], mut fetch_one: F) -> Result<T, FetchError>
where
    F: FnMut(&L) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut last_error = None;

    for (attempt, candidate) in candidates.iter().enumerate() {
        match fetch_one(candidate).await {
            Ok(payload) => return Ok(payload),
            Err(error) => {
                tracing::debug!(attempt, %error, "candidate failed, trying next");
                last_error = Some(error);
            }
        }
    }

    let error = last_error.map_or(FetchError::NoCandidates, |last| FetchError::Exhausted {
        attempts: candidates.len(),
        last: Box::new(last),
    });
    tracing::warn!(%error, "no candidate location could be loaded");
    Err(error)
}

pub const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Turns a status line and body into a payload using the fetcher's success
/// criteria. Transports that see the raw response share this.
pub fn decode_response(location: &str, status: u16, body: &str) -> Result<Value, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status {
            location: location.to_string(),
            status,
        });
    }
    decode_json(location, body)
}

pub fn decode_json(location: &str, body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|error| FetchError::Parse {
        location: location.to_string(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory transport: location -> (status, body). Unknown locations are
    /// transport failures.
    struct StubTransport {
        responses: HashMap<&'static str, (u16, &'static str)>,
        calls: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn new(responses: &[(&'static str, u16, &'static str)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(location, status, body)| (*location, (*status, *body)))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        async fn fetch(&self, location: String) -> Result<Value, FetchError> {
            self.calls.borrow_mut().push(location.clone());
            match self.responses.get(location.as_str()) {
                Some((status, body)) => decode_response(&location, *status, body),
                None => Err(FetchError::Transport {
                    location,
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    fn locations(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let transport = StubTransport::new(&[
            ("/build/a.json", 200, r#"{"ok": 1}"#),
            ("../build/a.json", 200, r#"{"ok": 2}"#),
        ]);
        let candidates = locations(&["/build/a.json", "../build/a.json"]);

        let value = fetch_first_ok(&candidates, |location| transport.fetch(location.clone()))
            .await
            .unwrap();

        assert_eq!(value, json!({"ok": 1}));
        assert_eq!(*transport.calls.borrow(), vec!["/build/a.json"]);
    }

    #[tokio::test]
    async fn falls_back_past_status_parse_and_network_failures() {
        let transport = StubTransport::new(&[
            ("/a", 404, "not found"),
            ("/b", 200, "{not json"),
            ("/d", 200, r#"{"companies": []}"#),
        ]);
        let candidates = locations(&["/a", "/b", "/c", "/d"]);

        let value = fetch_first_ok(&candidates, |location| transport.fetch(location.clone()))
            .await
            .unwrap();

        assert_eq!(value, json!({"companies": []}));
        assert_eq!(transport.calls.borrow().len(), 4);
    }

    #[tokio::test]
    async fn exhaustion_keeps_the_last_error() {
        let transport = StubTransport::new(&[("/a", 200, "{}"), ("/b", 500, "")]);
        let candidates = locations(&["/missing", "/b"]);

        let error = fetch_first_ok(&candidates, |location| transport.fetch(location.clone()))
            .await
            .unwrap_err();

        let (attempts, last) = match error {
            FetchError::Exhausted { attempts, last } => (attempts, last),
            other => panic!("expected an exhausted candidate list, got {other}"),
        };
        assert_eq!(attempts, 2);
        assert!(matches!(
            *last,
            FetchError::Status { status: 500, ref location } if location == "/b"
        ));
        assert_eq!(last.to_string(), "HTTP 500 for /b");
    }

    #[tokio::test]
    async fn empty_candidate_list_uses_generic_error() {
        let candidates: Vec<String> = Vec::new();
        let error = fetch_first_ok(&candidates, |_| async { Ok::<_, FetchError>(json!({})) })
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::NoCandidates));
        assert_eq!(error.to_string(), "Failed to load JSON");
    }

    #[test]
    fn decode_response_checks_status_before_body() {
        assert!(matches!(
            decode_response("/x", 304, "{}"),
            Err(FetchError::Status { status: 304, .. })
        ));
        assert!(matches!(
            decode_response("/x", 200, ""),
            Err(FetchError::Parse { .. })
        ));
        assert_eq!(decode_response("/x", 204, "[]").unwrap(), json!([]));
    }
}
