//! Resource records exchanged with the bbuddy API.
//!
//! These are plain value records owned by the application; the descriptor only
//! reads them when shaping a request and never mutates them.

// self
use crate::_prelude::*;

/// Budget account record. Identity is carried by `id`; the remaining fields are
/// plain values the server accepts on update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
	/// Server-assigned account identifier.
	pub id: i64,
	/// Display name of the account.
	pub name: String,
	/// Current balance.
	pub balance: f64,
}
impl Account {
	/// Creates a new account record.
	pub fn new(id: i64, name: impl Into<String>, balance: f64) -> Self {
		Self { id, name: name.into(), balance }
	}
}

/// User record returned by the fetch-user endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// Server-assigned user identifier.
	pub id: i64,
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
}
