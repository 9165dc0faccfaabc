//! Typed endpoint descriptors and a request-signing plugin for the bbuddy budgeting API: declare
//! the call, let the descriptor shape the request and the plugin stamp the session headers.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
#[cfg(feature = "reqwest")] pub mod client;
pub mod error;
pub mod model;
pub mod obs;
pub mod sign;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience fixtures for unit and integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::auth::{AuthorizedToken, TokenSupplier};

	/// Token snapshot fixture shared by plugin and client tests.
	pub fn test_token() -> AuthorizedToken {
		AuthorizedToken::new("u1", "c1", "a1", "bearer")
	}

	/// Builds a supplier that always yields the given snapshot (or none).
	pub fn static_supplier(token: Option<AuthorizedToken>) -> TokenSupplier {
		Arc::new(move || token.clone())
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use http::{HeaderMap, Method};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use http;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
