//! Immutable token snapshot and the supplier callback contract.

// self
use crate::_prelude::*;

/// Zero-argument credential lookup injected by the caller.
///
/// The plugin invokes it once per outgoing request, possibly concurrently for
/// requests in flight; it must be a read-only lookup. Credential storage and
/// refresh stay entirely outside this crate.
pub type TokenSupplier = Arc<dyn Fn() -> Option<AuthorizedToken> + Send + Sync>;

/// Immutable bundle of the four credential strings that authenticate a single
/// request.
///
/// A snapshot is read per request via a [`TokenSupplier`] and never stored or
/// mutated by this crate.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedToken {
	/// User identifier issued at sign-in.
	pub uid: String,
	/// Client identifier issued at sign-in.
	pub client: String,
	/// Access token value; callers must avoid logging it.
	pub access_token: String,
	/// Token type label (e.g. `bearer`).
	pub token_type: String,
}
impl AuthorizedToken {
	/// Creates a new snapshot from its four credential strings.
	pub fn new(
		uid: impl Into<String>,
		client: impl Into<String>,
		access_token: impl Into<String>,
		token_type: impl Into<String>,
	) -> Self {
		Self {
			uid: uid.into(),
			client: client.into(),
			access_token: access_token.into(),
			token_type: token_type.into(),
		}
	}
}
impl Debug for AuthorizedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthorizedToken")
			.field("uid", &self.uid)
			.field("client", &self.client)
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.finish()
	}
}
