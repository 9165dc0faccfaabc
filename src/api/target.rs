//! Target contracts describing how an endpoint variant becomes a request.
//!
//! [`Target`] is the pure mapping (path, method, parameters, encoding) and
//! [`Authorizable`] the capability check the signing plugin consults. Both are
//! total over any closed variant set that implements them.

// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Strategy used to place [`Parameters`] on the outgoing request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParameterEncoding {
	/// Parameters are serialized as a JSON request body.
	Json,
	/// Parameters are appended to the URL as a query string.
	#[default]
	Query,
}

/// JSON object carrying an endpoint's body or query parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);
impl Parameters {
	/// Returns `true` when no parameters are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Borrows the underlying JSON object.
	pub fn as_object(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Projects the parameters as query-string pairs.
	///
	/// Scalars render bare (`balance=10.5`, not `balance="10.5"`); compound
	/// values fall back to their compact JSON rendering.
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		self.0
			.iter()
			.map(|(key, value)| {
				let rendered = match value {
					Value::String(s) => s.clone(),
					Value::Null => String::new(),
					other => other.to_string(),
				};

				(key.clone(), rendered)
			})
			.collect()
	}
}
impl<K> FromIterator<(K, Value)> for Parameters
where
	K: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}

/// Pure mapping from an endpoint variant to its request shape.
///
/// Implementations must be total: every variant resolves to exactly one
/// (path, method, parameters, encoding) tuple and the mapping has no side
/// effects.
pub trait Target {
	/// URL path relative to the configured base URL.
	fn path(&self) -> String;

	/// HTTP method of the request.
	fn method(&self) -> Method;

	/// Body or query parameters, if the variant carries any.
	fn parameters(&self) -> Option<Parameters>;

	/// Strategy used to encode [`Target::parameters`].
	fn encoding(&self) -> ParameterEncoding;
}

/// Capability check consulted by the signing plugin before attaching auth
/// headers.
pub trait Authorizable {
	/// Returns `true` when requests to this target must carry session headers.
	fn requires_auth(&self) -> bool;
}
