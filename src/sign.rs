//! Request-signing plugin that stamps session headers onto outgoing calls.
//!
//! The plugin is a pure transform invoked once per request, on whatever thread
//! the HTTP client builds it. It degrades gracefully: no token or a target
//! without the auth capability means the request passes through untouched.

// crates.io
use http::{HeaderValue, Request, header::HeaderName};
// self
use crate::{
	_prelude::*,
	api::Authorizable,
	auth::{AuthorizedToken, TokenCell, TokenSupplier},
	error::SignError,
};

/// Name of the header carrying the token type label.
pub const TOKEN_TYPE_HEADER: &str = "token-type";
/// Name of the header carrying the user identifier.
pub const UID_HEADER: &str = "uid";
/// Name of the header carrying the client identifier.
pub const CLIENT_HEADER: &str = "client";
/// Name of the header carrying the access token value.
pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// Request interceptor that conditionally attaches the four session headers.
///
/// Construction takes a [`TokenSupplier`] so credential storage and refresh
/// stay with the caller; the plugin only reads a snapshot per request.
#[derive(Clone)]
pub struct AuthPlugin {
	token_supplier: TokenSupplier,
}
impl AuthPlugin {
	/// Creates a plugin around the given supplier.
	pub fn new(token_supplier: TokenSupplier) -> Self {
		Self { token_supplier }
	}

	/// Creates a plugin that reads snapshots from a [`TokenCell`].
	pub fn from_cell(cell: &TokenCell) -> Self {
		Self::new(cell.supplier())
	}

	/// Resolves the session headers for a target.
	///
	/// Returns `None` when the supplier yields no token or the target does not
	/// require auth; otherwise exactly the four session headers. The only error
	/// is a credential string that is not a valid header value.
	pub fn auth_headers<T>(&self, target: &T) -> Result<Option<HeaderMap>>
	where
		T: Authorizable + ?Sized,
	{
		let Some(token) = (self.token_supplier)() else { return Ok(None) };

		if !target.requires_auth() {
			return Ok(None);
		}

		Ok(Some(session_headers(&token)?))
	}

	/// Returns a copy of `request` with session headers attached when required.
	///
	/// The original request is never mutated, keeping it intact for retries or
	/// logging by the caller.
	pub fn prepare<B, T>(&self, request: &Request<B>, target: &T) -> Result<Request<B>>
	where
		B: Clone,
		T: Authorizable + ?Sized,
	{
		let mut copy = clone_request(request);

		if let Some(headers) = self.auth_headers(target)? {
			copy.headers_mut().extend(headers);
		}

		Ok(copy)
	}
}
impl Debug for AuthPlugin {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthPlugin").finish_non_exhaustive()
	}
}

/// Builds the four session headers from a token snapshot.
pub fn session_headers(token: &AuthorizedToken) -> Result<HeaderMap> {
	let mut headers = HeaderMap::with_capacity(4);

	for (name, value) in [
		(TOKEN_TYPE_HEADER, token.token_type.as_str()),
		(UID_HEADER, token.uid.as_str()),
		(CLIENT_HEADER, token.client.as_str()),
		(ACCESS_TOKEN_HEADER, token.access_token.as_str()),
	] {
		let value = HeaderValue::from_str(value)
			.map_err(|source| SignError::InvalidHeaderValue { header: name, source })?;

		headers.insert(HeaderName::from_static(name), value);
	}

	Ok(headers)
}

fn clone_request<B>(request: &Request<B>) -> Request<B>
where
	B: Clone,
{
	let mut copy = Request::new(request.body().clone());

	*copy.method_mut() = request.method().clone();
	*copy.uri_mut() = request.uri().clone();
	*copy.version_mut() = request.version();
	*copy.headers_mut() = request.headers().clone();

	copy
}
