//! Thread-safe in-process token slot for apps that want a ready-made supplier.

// self
use crate::{
	_prelude::*,
	auth::{AuthorizedToken, TokenSupplier},
};

/// Shared slot holding the most recent token snapshot.
///
/// The cell is a convenience backing for [`TokenSupplier`]: the app stores a
/// fresh snapshot after sign-in (and clears it on sign-out), while in-flight
/// requests read it concurrently. Persistence and refresh remain the caller's
/// responsibility.
#[derive(Clone, Debug, Default)]
pub struct TokenCell(Arc<RwLock<Option<AuthorizedToken>>>);
impl TokenCell {
	/// Replaces the stored snapshot.
	pub fn store(&self, token: AuthorizedToken) {
		*self.0.write() = Some(token);
	}

	/// Clears the stored snapshot.
	pub fn clear(&self) {
		*self.0.write() = None;
	}

	/// Returns a copy of the current snapshot, if any.
	pub fn snapshot(&self) -> Option<AuthorizedToken> {
		self.0.read().clone()
	}

	/// Builds a [`TokenSupplier`] that reads this cell on every call.
	pub fn supplier(&self) -> TokenSupplier {
		let cell = self.clone();

		Arc::new(move || cell.snapshot())
	}
}
