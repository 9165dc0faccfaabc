// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use bbuddy_api::{
	api::Endpoint,
	auth::{AuthorizedToken, TokenCell},
	client::ApiClient,
	error::Error,
	model::{Account, User},
	url::Url,
};

fn signed_client(server: &MockServer) -> ApiClient {
	let base = Url::parse(&server.base_url()).expect("Mock server URL should parse.");
	let cell = TokenCell::default();

	cell.store(AuthorizedToken::new("u1", "c1", "a1", "bearer"));

	ApiClient::with_token_cell(base, &cell).expect("Client should build with default transport.")
}

fn anonymous_client(server: &MockServer) -> ApiClient {
	let base = Url::parse(&server.base_url()).expect("Mock server URL should parse.");

	ApiClient::new(base, Arc::new(|| None)).expect("Client should build with default transport.")
}

#[tokio::test]
async fn sign_in_posts_credentials_without_session_headers() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/auth/sign_in")
				.json_body(json!({ "email": "a@b.c", "password": "pw" }));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": 100, "email": "a@b.c", "token": "FAKETOKEN" }));
		})
		.await;
	let response = anonymous_client(&server)
		.send(&Endpoint::SignIn { email: "a@b.c".into(), password: "pw".into() })
		.await
		.expect("Sign-in dispatch should succeed.");

	mock.assert_async().await;

	assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn show_accounts_sends_the_four_session_headers() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/accounts")
				.header("token-type", "bearer")
				.header("uid", "u1")
				.header("client", "c1")
				.header("access-token", "a1");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!([{ "id": 1, "name": "Cash", "balance": 100.0 }]));
		})
		.await;
	let accounts: Vec<Account> = signed_client(&server)
		.send_json(&Endpoint::ShowAccounts)
		.await
		.expect("Account listing should decode.");

	mock.assert_async().await;

	assert_eq!(accounts, vec![Account::new(1, "Cash", 100.0)]);
}

#[tokio::test]
async fn show_user_decodes_the_user_record() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/users/7").header("access-token", "a1");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": 7, "first_name": "Harry", "last_name": "Potter" }));
		})
		.await;
	let user: User = signed_client(&server)
		.send_json(&Endpoint::ShowUser { id: 7 })
		.await
		.expect("User fetch should decode.");

	mock.assert_async().await;

	assert_eq!(user, User { id: 7, first_name: "Harry".into(), last_name: "Potter".into() });
}

#[tokio::test]
async fn update_account_puts_mutable_fields_only() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			// Exact body match: `id` travels in the path and must not appear here.
			when.method(PUT)
				.path("/accounts/42")
				.json_body(json!({ "name": "Savings", "balance": 250.75 }));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": 42, "name": "Savings", "balance": 250.75 }));
		})
		.await;
	let updated: Account = signed_client(&server)
		.send_json(&Endpoint::UpdateAccount(Account::new(42, "Savings", 250.75)))
		.await
		.expect("Account update should decode.");

	mock.assert_async().await;

	assert_eq!(updated, Account::new(42, "Savings", 250.75));
}

#[tokio::test]
async fn malformed_body_surfaces_a_decode_error_with_status() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/users/7");
			then.status(200).header("content-type", "application/json").body("not json");
		})
		.await;
	let result: Result<User, _> =
		signed_client(&server).send_json(&Endpoint::ShowUser { id: 7 }).await;

	assert!(matches!(result, Err(Error::Decode { status: Some(200), .. })));
}
