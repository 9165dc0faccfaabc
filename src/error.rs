//! Crate-level error types shared by the descriptor, plugin, and dispatch layers.
//!
//! The endpoint mapping itself is total and never fails; errors here cover the
//! surrounding machinery only (URL assembly, header encoding, transport, decoding).

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request signing failed while encoding auth headers.
	#[error(transparent)]
	Sign(#[from] SignError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Response body could not be decoded into the requested type.
	#[error("Response body is not valid JSON for the requested type.")]
	Decode {
		/// Structured parsing failure, including the path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code of the response being decoded, when available.
		status: Option<u16>,
	},
}

/// Configuration and validation failures raised while assembling requests.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint path could not be joined onto the configured base URL.
	#[error("Endpoint path `{path}` cannot be joined onto the base URL.")]
	InvalidPath {
		/// Resolved endpoint path that failed to join.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Assembled request was rejected by the HTTP client.
	#[error("Request for `{path}` could not be built.")]
	RequestBuild {
		/// Resolved endpoint path of the rejected request.
		path: String,
		/// Underlying builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Request signing failures.
///
/// Missing tokens and non-auth targets are pass-throughs, not errors; only a
/// credential string that cannot be represented as an HTTP header value lands
/// here.
#[derive(Debug, ThisError)]
pub enum SignError {
	/// Token snapshot field contains bytes that are not a valid header value.
	#[error("Token field cannot be encoded into the `{header}` header.")]
	InvalidHeaderValue {
		/// Auth header that rejected the value.
		header: &'static str,
		/// Underlying encoding failure.
		#[source]
		source: http::header::InvalidHeaderValue,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
