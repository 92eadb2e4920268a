//! Async client for the ConfluxScan explorer API.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Instrument, Span, debug, debug_span, info_span, warn};

use crate::api::{AccountApi, ContractApi, NftApi, StatisticsApi, UtilsApi};
use crate::config::{ApiConfig, Network};
use crate::error::ValidationError;
use crate::format::{FormatRules, ResponseEnvelope, wrap_response};
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::validation::{AddressValidator, Base32AddressValidator};

pub use crate::error::{Error, Result};

/// The explorer's `{code, message, data}` wrapper.
///
/// A missing `code` counts as success; a missing `data` decodes as `null`.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
}

/// Async client for the ConfluxScan API.
///
/// Endpoints are grouped by domain: [`account`](Self::account),
/// [`contract`](Self::contract), [`nft`](Self::nft),
/// [`statistics`](Self::statistics) and [`utils`](Self::utils). The client is
/// cheap to clone and safe to share between tasks.
///
/// # Example
///
/// ```no_run
/// use confluxscan_client::{ScanClient, types::AccountListParams};
///
/// #[tokio::main]
/// async fn main() -> confluxscan_client::client::Result<()> {
///     let client = ScanClient::mainnet();
///     let txs = client
///         .account()
///         .transactions(&AccountListParams::new("cfx:aapgmw9up7tm7dxy5pctg8442dz6x7ak4u9fzsj0fm"))
///         .await?;
///     println!("{} transactions", txs.list.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ScanClient {
    transport: Arc<dyn HttpTransport>,
    validator: Arc<dyn AddressValidator>,
    base_url: String,
    api_key: Option<String>,
    span: Span,
}

impl fmt::Debug for ScanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ScanClient {
    /// Create a client over `reqwest` for the given configuration.
    #[cfg(feature = "client")]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, crate::transport::ReqwestTransport::new())
    }

    /// Create a client for Conflux Core Space mainnet.
    #[cfg(feature = "client")]
    pub fn mainnet() -> Self {
        Self::new(ApiConfig::mainnet())
    }

    /// Create a client for Conflux Core Space testnet.
    #[cfg(feature = "client")]
    pub fn testnet() -> Self {
        Self::new(ApiConfig::testnet())
    }

    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(config: ApiConfig, transport: impl HttpTransport + 'static) -> Self {
        Self::from_parts(config, Arc::new(transport), None, None)
    }

    pub fn builder() -> ScanClientBuilder {
        ScanClientBuilder::default()
    }

    fn from_parts(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        validator: Option<Arc<dyn AddressValidator>>,
        span: Option<Span>,
    ) -> Self {
        let base_url = config.base_url().to_string();
        let span = span.unwrap_or_else(|| info_span!("confluxscan", base_url = %base_url));
        debug!(parent: &span, network = ?config.target, "API client initialized");
        Self {
            transport,
            validator: validator.unwrap_or_else(|| Arc::new(Base32AddressValidator)),
            base_url,
            api_key: config.api_key,
            span,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Domains ──────────────────────────────────────────────────

    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    pub fn contract(&self) -> ContractApi<'_> {
        ContractApi::new(self)
    }

    pub fn nft(&self) -> NftApi<'_> {
        NftApi::new(self)
    }

    pub fn statistics(&self) -> StatisticsApi<'_> {
        StatisticsApi::new(self)
    }

    pub fn utils(&self) -> UtilsApi<'_> {
        UtilsApi::new(self)
    }

    // ── Requests ─────────────────────────────────────────────────

    /// Full request URL for `endpoint`, including `apiKey` when configured.
    pub fn url_for(&self, endpoint: &str, params: &QueryParams) -> String {
        let query = params.encode(self.api_key.as_deref());
        if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        }
    }

    /// Calls `endpoint` and returns the envelope's `data` untyped.
    ///
    /// Useful for endpoints this crate does not model yet. `data` may be `null`.
    pub async fn request(&self, endpoint: &str, params: QueryParams) -> Result<Value> {
        let url = self.url_for(endpoint, &params);
        let span = debug_span!(parent: &self.span, "request", endpoint);

        async {
            debug!(query = %params.encode(None), "making API request");
            let response = self.transport.get(&url).await?;

            if !response.is_success() {
                warn!(
                    status = response.status,
                    status_text = %response.status_text,
                    "API request failed"
                );
                return Err(Error::Transport {
                    status: response.status,
                    status_text: response.status_text,
                });
            }

            let envelope: ApiEnvelope = serde_json::from_str(&response.body)?;
            if envelope.code != 0 {
                let message = envelope
                    .message
                    .unwrap_or_else(|| format!("{endpoint} failed with code {}", envelope.code));
                warn!(code = envelope.code, %message, "API returned error");
                return Err(Error::Api {
                    code: Some(envelope.code),
                    message,
                });
            }

            debug!("API request successful");
            Ok(envelope.data)
        }
        .instrument(span)
        .await
    }

    /// Calls `endpoint` and decodes a non-null `data` as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T> {
        let data = self.request_data(endpoint, params).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Like [`fetch`](Self::fetch), pairing the typed payload with its display form.
    pub(crate) async fn fetch_formatted<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
        rules: &FormatRules,
    ) -> Result<ResponseEnvelope<T>> {
        let data = self.request_data(endpoint, params).await?;
        let formatted = rules.apply(&data);
        Ok(wrap_response(serde_json::from_value(data)?, formatted))
    }

    async fn request_data(&self, endpoint: &str, params: QueryParams) -> Result<Value> {
        match self.request(endpoint, params).await? {
            Value::Null => Err(Error::api(format!("Response from {endpoint} carried no data"))),
            data => Ok(data),
        }
    }

    /// Fails with [`ValidationError::InvalidAddress`] unless the validator accepts `address`.
    pub(crate) fn check_address(&self, address: &str) -> Result<()> {
        if self.validator.is_valid(address) {
            Ok(())
        } else {
            warn!(parent: &self.span, address, "invalid Core address provided");
            Err(ValidationError::InvalidAddress(address.to_string()).into())
        }
    }

    pub(crate) fn is_valid_address(&self, address: &str) -> bool {
        self.validator.is_valid(address)
    }
}

/// Step-by-step construction of a [`ScanClient`].
///
/// ```
/// use confluxscan_client::{Network, ScanClient};
///
/// let client = ScanClient::builder()
///     .target(Network::Testnet)
///     .api_key("my-key")
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "https://api-testnet.confluxscan.org");
/// ```
#[derive(Default)]
pub struct ScanClientBuilder {
    config: ApiConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    validator: Option<Arc<dyn AddressValidator>>,
    span: Option<Span>,
}

impl ScanClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn target(mut self, target: Network) -> Self {
        self.config.target = target;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Override the host the target would otherwise select.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Share one transport between several clients.
    pub fn shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the structural [`Base32AddressValidator`].
    pub fn validator(mut self, validator: impl AddressValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Parent span for every request the client makes.
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn build(self) -> Result<ScanClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };
        Ok(ScanClient::from_parts(
            self.config,
            transport,
            self.validator,
            self.span,
        ))
    }
}

#[cfg(feature = "client")]
fn default_transport() -> Result<Arc<dyn HttpTransport>> {
    Ok(Arc::new(crate::transport::ReqwestTransport::new()))
}

#[cfg(not(feature = "client"))]
fn default_transport() -> Result<Arc<dyn HttpTransport>> {
    Err(Error::MissingTransport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportResponse;
    use async_trait::async_trait;

    struct StaticTransport(TransportResponse);

    #[async_trait]
    impl HttpTransport for StaticTransport {
        async fn get(&self, _url: &str) -> Result<TransportResponse> {
            Ok(self.0.clone())
        }
    }

    fn client_returning(status: u16, body: &str) -> ScanClient {
        let response = TransportResponse {
            status,
            status_text: "status".into(),
            body: body.into(),
        };
        ScanClient::with_transport(ApiConfig::mainnet(), StaticTransport(response))
    }

    #[test]
    fn test_client_creation() {
        let client = client_returning(200, "{}");
        assert_eq!(client.base_url(), "https://api.confluxscan.org");

        let client = ScanClient::with_transport(
            ApiConfig::testnet(),
            StaticTransport(TransportResponse::ok("{}")),
        );
        assert_eq!(client.base_url(), "https://api-testnet.confluxscan.org");

        let client = ScanClient::with_transport(
            ApiConfig::mainnet().with_host("https://scan.example"),
            StaticTransport(TransportResponse::ok("{}")),
        );
        assert_eq!(client.base_url(), "https://scan.example");
    }

    #[test]
    fn url_includes_api_key() {
        let client = ScanClient::builder()
            .api_key("secret")
            .transport(StaticTransport(TransportResponse::ok("{}")))
            .build()
            .unwrap();
        let params = QueryParams::new().set("limit", 10);
        assert_eq!(
            client.url_for("/account/tokens", &params),
            "https://api.confluxscan.org/account/tokens?limit=10&apiKey=secret"
        );
        assert_eq!(
            client.url_for("/statistics/supply", &QueryParams::new()),
            "https://api.confluxscan.org/statistics/supply?apiKey=secret"
        );
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[tokio::test]
    async fn unwraps_envelope_data() {
        let client = client_returning(200, r#"{"code":0,"message":"OK","data":{"total":"7"}}"#);
        let data = client.request("/x", QueryParams::new()).await.unwrap();
        assert_eq!(data["total"], "7");
    }

    #[tokio::test]
    async fn missing_code_counts_as_success() {
        let client = client_returning(200, r#"{"status":"1","data":[1,2]}"#);
        let data: Vec<u8> = client.fetch("/x", QueryParams::new()).await.unwrap();
        assert_eq!(data, vec![1, 2]);
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let client = client_returning(503, "");
        let err = client.request("/x", QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, Error::Transport { status: 503, .. }));
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn failing_code_is_api_error() {
        let client = client_returning(200, r#"{"code":400,"message":"bad request"}"#);
        let err = client.request("/x", QueryParams::new()).await.unwrap_err();
        match err {
            Error::Api { code, message } => {
                assert_eq!(code, Some(400));
                assert_eq!(message, "bad request");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn null_data_is_api_error_for_typed_calls() {
        let client = client_returning(200, r#"{"code":0,"data":null}"#);
        assert_eq!(
            client.request("/x", QueryParams::new()).await.unwrap(),
            Value::Null
        );
        let err = client
            .fetch::<Value>("/x", QueryParams::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API error: Response from /x carried no data");
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let client = client_returning(200, "<html>");
        let err = client.request("/x", QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
