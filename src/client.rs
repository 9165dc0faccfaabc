//! Reqwest-backed dispatch layer that turns endpoint variants into live calls.
//!
//! The client only shapes and sends requests: HTTP status handling stays with
//! the caller, and transport errors are surfaced without reinterpretation.

// crates.io
use reqwest::{Request, Response};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	api::{Endpoint, ParameterEncoding, Target},
	auth::{TokenCell, TokenSupplier},
	error::{ConfigError, TransportError},
	obs::{RequestOutcome, RequestSpan, record_request_outcome},
	sign::AuthPlugin,
};

/// Dispatches [`Endpoint`] variants over a shared [`ReqwestClient`].
///
/// The client holds the configured base URL and the signing plugin; both the
/// descriptor mapping and the header injection happen during
/// [`build_request`](Self::build_request), before anything touches the network.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: ReqwestClient,
	base_url: Url,
	plugin: AuthPlugin,
}
impl ApiClient {
	/// Creates a client with a default reqwest transport.
	pub fn new(base_url: Url, token_supplier: TokenSupplier) -> Result<Self> {
		let http = ReqwestClient::builder().build().map_err(ConfigError::http_client_build)?;

		Ok(Self::with_client(http, base_url, token_supplier))
	}

	/// Wraps an existing reqwest [`ReqwestClient`] so connection pools can be shared.
	pub fn with_client(http: ReqwestClient, base_url: Url, token_supplier: TokenSupplier) -> Self {
		Self { http, base_url, plugin: AuthPlugin::new(token_supplier) }
	}

	/// Creates a client whose plugin reads snapshots from a [`TokenCell`].
	pub fn with_token_cell(base_url: Url, cell: &TokenCell) -> Result<Self> {
		Self::new(base_url, cell.supplier())
	}

	/// Returns the configured base URL.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Assembles the outgoing request for an endpoint without dispatching it.
	///
	/// This is the whole mapping made inspectable: URL join, method, parameter
	/// encoding, and conditional session headers.
	pub fn build_request(&self, endpoint: &Endpoint) -> Result<Request> {
		let path = endpoint.path();
		let url = self
			.base_url
			.join(&path)
			.map_err(|source| ConfigError::InvalidPath { path: path.clone(), source })?;
		let mut builder = self.http.request(endpoint.method(), url);

		if let Some(params) = endpoint.parameters() {
			builder = match endpoint.encoding() {
				ParameterEncoding::Json => builder.json(&params),
				ParameterEncoding::Query => builder.query(&params.query_pairs()),
			};
		}
		if let Some(headers) = self.plugin.auth_headers(endpoint)? {
			builder = builder.headers(headers);
		}

		builder
			.build()
			.map_err(|source| ConfigError::RequestBuild { path, source: Box::new(source) })
			.map_err(Into::into)
	}

	/// Dispatches an endpoint and returns the raw response.
	///
	/// No status interpretation happens here; a 4xx/5xx response is still `Ok`.
	pub async fn send(&self, endpoint: &Endpoint) -> Result<Response> {
		let kind = endpoint.kind();
		let span = RequestSpan::new(kind, "send");

		record_request_outcome(kind, RequestOutcome::Attempt);

		let request = match self.build_request(endpoint) {
			Ok(request) => request,
			Err(e) => {
				record_request_outcome(kind, RequestOutcome::Failure);

				return Err(e);
			},
		};

		match span.instrument(self.http.execute(request)).await {
			Ok(response) => {
				record_request_outcome(kind, RequestOutcome::Success);

				Ok(response)
			},
			Err(e) => {
				record_request_outcome(kind, RequestOutcome::Failure);

				Err(TransportError::from(e).into())
			},
		}
	}

	/// Dispatches an endpoint and decodes the response body as JSON.
	///
	/// Decode failures carry the HTTP status so callers can tell a malformed
	/// success apart from an error page.
	pub async fn send_json<T>(&self, endpoint: &Endpoint) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = self.send(endpoint).await?;
		let status = response.status().as_u16();
		let bytes = response.bytes().await.map_err(TransportError::from)?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode { source, status: Some(status) })
	}
}
