//! Optional observability helpers for request dispatch.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `bbuddy_api.request` with the `endpoint`
//!   (variant) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `bbuddy_api_request_total` counter for every
//!   attempt/success/failure, labeled by `endpoint` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Endpoint variants observed during dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
	/// Credential exchange.
	SignIn,
	/// Single user fetch.
	ShowUser,
	/// Account listing.
	ShowAccounts,
	/// Account update.
	UpdateAccount,
}
impl EndpointKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			EndpointKind::SignIn => "sign_in",
			EndpointKind::ShowUser => "show_user",
			EndpointKind::ShowAccounts => "show_accounts",
			EndpointKind::UpdateAccount => "update_account",
		}
	}
}
impl Display for EndpointKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each dispatch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a dispatch helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
