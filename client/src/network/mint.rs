//! Limited item minting against the farm API

use serde::{Deserialize, Serialize};

use super::http::{HttpTransport, UreqTransport};
use crate::game::LimitedItem;
use crate::wallet::{SessionError, SessionManager};

pub const MINT_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Body of `POST {api_url}/mint`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub farm_id: u64,
    pub sender: String,
    pub session_id: String,
    pub signature: String,
    pub item: LimitedItem,
}

/// Transaction descriptor returned by the API, handed to the wallet as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MintTransaction(pub serde_json::Value);

#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("Could not mint your object")]
    RequestFailed,
    #[error("Could not encode mint request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Mint response was not valid JSON: {0}")]
    InvalidResponse(String),
    #[error("Wallet sync failed: {0}")]
    Sync(#[from] SessionError),
}

pub struct MintClient<T: HttpTransport = UreqTransport> {
    api_url: Option<String>,
    transport: T,
}

impl MintClient<UreqTransport> {
    pub fn new(api_url: Option<&str>) -> Self {
        Self::with_transport(api_url, UreqTransport::new())
    }
}

impl<T: HttpTransport> MintClient<T> {
    /// An empty `api_url` counts as not configured
    pub fn with_transport(api_url: Option<&str>, transport: T) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        Self { api_url, transport }
    }

    pub fn is_configured(&self) -> bool {
        self.api_url.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the mint request. `Ok(None)` when no API is configured.
    pub fn request_mint(&self, request: &MintRequest) -> Result<Option<MintTransaction>, MintError> {
        let Some(api_url) = &self.api_url else {
            return Ok(None);
        };

        log::info!("Sending mint request for {} (farm {})", request.item, request.farm_id);

        let url = format!("{}/mint", api_url);
        let body = serde_json::to_string(request)?;

        let response = self
            .transport
            .post_json(&url, MINT_CONTENT_TYPE, &body)
            .map_err(|e| {
                log::warn!("Mint request to {} failed: {}", url, e);
                MintError::RequestFailed
            })?;

        if !response.is_ok() {
            log::warn!("Mint request to {} returned status {}", url, response.status);
            return Err(MintError::RequestFailed);
        }

        let transaction: MintTransaction =
            serde_json::from_str(&response.body).map_err(|e| MintError::InvalidResponse(e.to_string()))?;

        Ok(Some(transaction))
    }

    /// Request the mint, then sync the resulting transaction into the wallet session.
    ///
    /// Returns `Ok(None)` without contacting the API or the wallet when minting
    /// is not configured.
    pub fn mint<S: SessionManager + ?Sized>(
        &self,
        request: &MintRequest,
        sessions: &mut S,
    ) -> Result<Option<S::Session>, MintError> {
        let Some(transaction) = self.request_mint(request)? else {
            return Ok(None);
        };

        let session = sessions.sync(transaction)?;
        log::info!("Synced minted {} into wallet session", request.item);

        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::http::{HttpResponse, TransportError};
    use std::cell::RefCell;

    struct MockTransport {
        response: Result<HttpResponse, String>,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                response: Err("connection refused".to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for MockTransport {
        fn post_json(&self, url: &str, content_type: &str, body: &str) -> Result<HttpResponse, TransportError> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), content_type.to_string(), body.to_string()));
            self.response.clone().map_err(TransportError)
        }
    }

    #[derive(Default)]
    struct RecordingSessions {
        synced: Vec<MintTransaction>,
        fail: bool,
    }

    impl SessionManager for RecordingSessions {
        type Session = usize;

        fn sync(&mut self, transaction: MintTransaction) -> Result<usize, SessionError> {
            if self.fail {
                return Err(SessionError::NotConnected);
            }
            self.synced.push(transaction);
            Ok(self.synced.len())
        }
    }

    fn request() -> MintRequest {
        MintRequest {
            farm_id: 42,
            sender: "0xfarmer".to_string(),
            session_id: "session-1".to_string(),
            signature: "0xsig".to_string(),
            item: LimitedItem::SunflowerStatue,
        }
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "farmId": 42,
                "sender": "0xfarmer",
                "sessionId": "session-1",
                "signature": "0xsig",
                "item": "Sunflower Statue"
            })
        );
    }

    #[test]
    fn test_success_syncs_once_and_returns_session() {
        let transport = MockTransport::replying(200, r#"{"hash":"0x123","deadline":99}"#);
        let client = MintClient::with_transport(Some("https://api.example.com/"), &transport);
        let mut sessions = RecordingSessions::default();

        let result = client.mint(&request(), &mut sessions).unwrap();

        assert_eq!(result, Some(1));
        assert_eq!(
            sessions.synced,
            vec![MintTransaction(serde_json::json!({"hash": "0x123", "deadline": 99}))]
        );

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (url, content_type, body) = &calls[0];
        assert_eq!(url, "https://api.example.com/mint");
        assert_eq!(content_type, "application/json;charset=UTF-8");
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent, serde_json::to_value(request()).unwrap());
    }

    #[test]
    fn test_server_error_fails_without_sync() {
        let transport = MockTransport::replying(500, r#"{"error":"nope"}"#);
        let client = MintClient::with_transport(Some("https://api.example.com"), &transport);
        let mut sessions = RecordingSessions::default();

        let result = client.mint(&request(), &mut sessions);

        assert!(matches!(result, Err(MintError::RequestFailed)));
        assert_eq!(result.unwrap_err().to_string(), "Could not mint your object");
        assert!(sessions.synced.is_empty());
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[test]
    fn test_non_200_success_status_fails() {
        let transport = MockTransport::replying(201, "{}");
        let client = MintClient::with_transport(Some("https://api.example.com"), &transport);
        let mut sessions = RecordingSessions::default();

        assert!(matches!(client.mint(&request(), &mut sessions), Err(MintError::RequestFailed)));
        assert!(sessions.synced.is_empty());
    }

    #[test]
    fn test_unreachable_api_is_generic_failure() {
        let transport = MockTransport::unreachable();
        let client = MintClient::with_transport(Some("https://api.example.com"), &transport);
        let mut sessions = RecordingSessions::default();

        assert!(matches!(client.mint(&request(), &mut sessions), Err(MintError::RequestFailed)));
        assert!(sessions.synced.is_empty());
    }

    #[test]
    fn test_unconfigured_is_noop() {
        for api_url in [None, Some("")] {
            let transport = MockTransport::replying(200, "{}");
            let client = MintClient::with_transport(api_url, &transport);
            let mut sessions = RecordingSessions::default();

            assert!(!client.is_configured());
            assert_eq!(client.mint(&request(), &mut sessions).unwrap(), None);
            assert!(transport.calls.borrow().is_empty());
            assert!(sessions.synced.is_empty());
        }
    }

    #[test]
    fn test_invalid_json_fails_without_sync() {
        let transport = MockTransport::replying(200, "not json");
        let client = MintClient::with_transport(Some("https://api.example.com"), &transport);
        let mut sessions = RecordingSessions::default();

        assert!(matches!(client.mint(&request(), &mut sessions), Err(MintError::InvalidResponse(_))));
        assert!(sessions.synced.is_empty());
    }

    #[test]
    fn test_wallet_failure_is_reported() {
        let transport = MockTransport::replying(200, "{}");
        let client = MintClient::with_transport(Some("https://api.example.com"), &transport);
        let mut sessions = RecordingSessions {
            fail: true,
            ..Default::default()
        };

        assert!(matches!(
            client.mint(&request(), &mut sessions),
            Err(MintError::Sync(SessionError::NotConnected))
        ));
    }
}
