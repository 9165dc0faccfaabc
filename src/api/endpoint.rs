//! The closed set of bbuddy API calls and their request mappings.

// crates.io
use serde_json::{Value, json};
// self
use crate::{
	_prelude::*,
	api::{Authorizable, ParameterEncoding, Parameters, Target},
	model::Account,
	obs::EndpointKind,
};

/// One supported API call, carrying its own typed payload.
///
/// The set is closed and every variant maps to exactly one
/// (path, method, parameters, encoding, auth) tuple; the `match` arms below are
/// exhaustive by construction, so no variant can be left unhandled.
#[derive(Clone, Debug, PartialEq)]
pub enum Endpoint {
	/// Exchanges credentials for a session token.
	SignIn {
		/// Account email address.
		email: String,
		/// Account password.
		password: String,
	},
	/// Fetches a single user record.
	ShowUser {
		/// Identifier of the user to fetch.
		id: i64,
	},
	/// Lists the signed-in user's accounts.
	ShowAccounts,
	/// Updates an account's mutable fields. The identity travels in the path;
	/// only `name` and `balance` go into the body.
	UpdateAccount(Account),
}
impl Endpoint {
	/// Returns the stable label used for spans and metrics.
	pub const fn kind(&self) -> EndpointKind {
		match self {
			Self::SignIn { .. } => EndpointKind::SignIn,
			Self::ShowUser { .. } => EndpointKind::ShowUser,
			Self::ShowAccounts => EndpointKind::ShowAccounts,
			Self::UpdateAccount(_) => EndpointKind::UpdateAccount,
		}
	}

	/// Returns a canned response fixture for stubbed dispatch in app tests.
	pub fn sample_body(&self) -> Value {
		match self {
			Self::SignIn { email, .. } =>
				json!({ "id": 100, "email": email, "token": "FAKETOKEN" }),
			Self::ShowUser { id } =>
				json!({ "id": id, "first_name": "Harry", "last_name": "Potter" }),
			Self::ShowAccounts => json!([{ "id": 1, "name": "Cash", "balance": 100.0 }]),
			Self::UpdateAccount(account) =>
				json!({ "id": account.id, "name": account.name, "balance": account.balance }),
		}
	}
}
impl Target for Endpoint {
	fn path(&self) -> String {
		match self {
			Self::SignIn { .. } => "/auth/sign_in".into(),
			Self::ShowUser { id } => format!("/users/{id}"),
			Self::ShowAccounts => "/accounts".into(),
			Self::UpdateAccount(account) => format!("/accounts/{}", account.id),
		}
	}

	fn method(&self) -> Method {
		match self {
			Self::ShowUser { .. } | Self::ShowAccounts => Method::GET,
			Self::SignIn { .. } => Method::POST,
			Self::UpdateAccount(_) => Method::PUT,
		}
	}

	fn parameters(&self) -> Option<Parameters> {
		match self {
			Self::ShowUser { .. } | Self::ShowAccounts => None,
			Self::SignIn { email, password } => Some(Parameters::from_iter([
				("email", json!(email)),
				("password", json!(password)),
			])),
			Self::UpdateAccount(account) => Some(Parameters::from_iter([
				("name", json!(account.name)),
				("balance", json!(account.balance)),
			])),
		}
	}

	fn encoding(&self) -> ParameterEncoding {
		match self {
			Self::SignIn { .. } | Self::UpdateAccount(_) => ParameterEncoding::Json,
			_ => ParameterEncoding::Query,
		}
	}
}
impl Authorizable for Endpoint {
	fn requires_auth(&self) -> bool {
		!matches!(self, Self::SignIn { .. })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn sign_in() -> Endpoint {
		Endpoint::SignIn { email: "harry@hogwarts.uk".into(), password: "caput draconis".into() }
	}

	#[test]
	fn sign_in_maps_to_post_json_without_auth() {
		let endpoint = sign_in();

		assert_eq!(endpoint.path(), "/auth/sign_in");
		assert_eq!(endpoint.method(), Method::POST);
		assert_eq!(endpoint.encoding(), ParameterEncoding::Json);
		assert!(!endpoint.requires_auth());

		let params = endpoint.parameters().expect("Sign-in should carry credentials.");

		assert_eq!(
			serde_json::to_value(&params).expect("Parameters should serialize."),
			json!({ "email": "harry@hogwarts.uk", "password": "caput draconis" })
		);
	}

	#[test]
	fn show_user_maps_to_get_without_parameters() {
		let endpoint = Endpoint::ShowUser { id: 7 };

		assert_eq!(endpoint.path(), "/users/7");
		assert_eq!(endpoint.method(), Method::GET);
		assert_eq!(endpoint.encoding(), ParameterEncoding::Query);
		assert!(endpoint.parameters().is_none());
		assert!(endpoint.requires_auth());
	}

	#[test]
	fn show_accounts_maps_to_get_without_parameters() {
		let endpoint = Endpoint::ShowAccounts;

		assert_eq!(endpoint.path(), "/accounts");
		assert_eq!(endpoint.method(), Method::GET);
		assert_eq!(endpoint.encoding(), ParameterEncoding::Query);
		assert!(endpoint.parameters().is_none());
		assert!(endpoint.requires_auth());
	}

	#[test]
	fn update_account_keeps_id_out_of_the_body() {
		let endpoint = Endpoint::UpdateAccount(Account::new(42, "Savings", 250.75));

		assert_eq!(endpoint.path(), "/accounts/42");
		assert_eq!(endpoint.method(), Method::PUT);
		assert_eq!(endpoint.encoding(), ParameterEncoding::Json);
		assert!(endpoint.requires_auth());

		let params = endpoint.parameters().expect("Update should carry the mutable fields.");

		assert_eq!(
			serde_json::to_value(&params).expect("Parameters should serialize."),
			json!({ "name": "Savings", "balance": 250.75 })
		);
		assert!(!params.as_object().contains_key("id"));
	}

	#[test]
	fn sample_body_is_total_over_the_variant_set() {
		let variants = [
			sign_in(),
			Endpoint::ShowUser { id: 7 },
			Endpoint::ShowAccounts,
			Endpoint::UpdateAccount(Account::new(1, "Cash", 0.0)),
		];

		for endpoint in variants {
			assert!(!endpoint.sample_body().is_null());
		}
	}
}
