// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end tests for the translation editor and message endpoints.
//!
//! Each test runs the full router against a SQLite database in a temp dir.

use axum::{
	body::Body,
	http::{header, Method, Request, StatusCode},
	response::Response,
	Router,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use taramar_common_i18n::{Locale, MessageCatalog, MessageTree};
use tempfile::TempDir;
use tower::ServiceExt;

use taramar_server::{
	api::{create_app_state, create_router},
	db::{create_pool, run_migrations},
	ServerConfig,
};

fn tree(value: Value) -> MessageTree {
	serde_json::from_value(value).unwrap()
}

fn scenario_catalog() -> MessageCatalog {
	MessageCatalog::from_bundles([
		(
			Locale::En,
			tree(json!({
				"hero": { "title": "Welcome", "subtitle": "Natural care" },
				"footer": { "title": "Taramar", "links": ["Privacy", "Terms"] }
			})),
		),
		(
			Locale::Fr,
			tree(json!({
				"hero": { "title": "Bienvenue", "subtitle": "Soin naturel" },
				"footer": { "title": "Taramar", "links": ["Confidentialité", "Conditions"] },
				"promo": { "fr_only": "Offre du mois" }
			})),
		),
		(
			Locale::Nl,
			tree(json!({
				"hero": { "title": "Welkom", "subtitle": "Natuurlijke zorg" },
				"footer": { "title": "Taramar", "links": ["Privacy", "Voorwaarden"] }
			})),
		),
	])
}

async fn create_test_app_with(catalog: MessageCatalog) -> (Router, TempDir) {
	let dir = tempfile::tempdir().unwrap();
	let db_url = format!("sqlite:{}", dir.path().join("test.db").display());
	let pool = create_pool(&db_url, 4).await.unwrap();
	run_migrations(&pool).await.unwrap();

	let config = ServerConfig::default();
	let state = create_app_state(pool, Arc::new(catalog), &config);
	(create_router(state), dir)
}

async fn create_test_app() -> (Router, TempDir) {
	create_test_app_with(scenario_catalog()).await
}

/// An app whose override table has gone missing after startup.
async fn create_app_without_override_table() -> (Router, TempDir) {
	let dir = tempfile::tempdir().unwrap();
	let db_url = format!("sqlite:{}", dir.path().join("test.db").display());
	let pool = create_pool(&db_url, 4).await.unwrap();
	run_migrations(&pool).await.unwrap();
	sqlx::query("DROP TABLE translation_overrides")
		.execute(&pool)
		.await
		.unwrap();

	let config = ServerConfig::default();
	let state = create_app_state(pool, Arc::new(scenario_catalog()), &config);
	(create_router(state), dir)
}

async fn body_json(response: Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> Response {
	app.clone()
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap()
}

async fn save(app: &Router, body: Value) -> Response {
	app.clone()
		.oneshot(
			Request::builder()
				.method(Method::PUT)
				.uri("/api/translations/save")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(body.to_string()))
				.unwrap(),
		)
		.await
		.unwrap()
}

async fn messages(app: &Router, locale: &str) -> Value {
	let response = get(app, &format!("/api/messages/{locale}")).await;
	assert_eq!(response.status(), StatusCode::OK);
	body_json(response).await["messages"].clone()
}

async fn listing_row(app: &Router, key: &str) -> Value {
	let response = get(app, "/api/translations").await;
	assert_eq!(response.status(), StatusCode::OK);
	let listing = body_json(response).await;
	listing["rows"]
		.as_array()
		.unwrap()
		.iter()
		.find(|row| row["key"] == key)
		.cloned()
		.unwrap_or_else(|| panic!("no row for {key}"))
}

#[tokio::test]
async fn test_static_value_without_override() {
	let (app, _dir) = create_test_app().await;

	let en = messages(&app, "en").await;
	assert_eq!(en["hero"]["title"], "Welcome");
}

#[tokio::test]
async fn test_save_then_clear_override() {
	let (app, _dir) = create_test_app().await;

	let response = save(
		&app,
		json!({ "key": "hero.title", "values": { "en": "Bienvenue" } }),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!({ "ok": true }));

	assert_eq!(messages(&app, "en").await["hero"]["title"], "Bienvenue");
	let row = listing_row(&app, "hero.title").await;
	assert_eq!(row["isOverridden"]["en"], true);
	assert_eq!(row["values"]["en"], "Bienvenue");

	let response = save(&app, json!({ "key": "hero.title", "values": { "en": "" } })).await;
	assert_eq!(response.status(), StatusCode::OK);

	assert_eq!(messages(&app, "en").await["hero"]["title"], "Welcome");
	let row = listing_row(&app, "hero.title").await;
	assert_eq!(row["isOverridden"]["en"], false);
	assert_eq!(row["values"]["en"], "Welcome");
}

#[tokio::test]
async fn test_clear_is_idempotent() {
	let (app, _dir) = create_test_app().await;

	for _ in 0..2 {
		let response = save(&app, json!({ "key": "hero.title", "values": { "en": "" } })).await;
		assert_eq!(response.status(), StatusCode::OK);
	}

	let row = listing_row(&app, "hero.title").await;
	assert_eq!(row["isOverridden"]["en"], false);
}

#[tokio::test]
async fn test_array_values_are_not_editable() {
	let (app, _dir) = create_test_app().await;

	let listing = body_json(get(&app, "/api/translations").await).await;
	let keys: Vec<&str> = listing["rows"]
		.as_array()
		.unwrap()
		.iter()
		.map(|row| row["key"].as_str().unwrap())
		.collect();
	assert!(!keys.contains(&"footer.links"));
	assert!(keys.contains(&"footer.title"));

	let en = messages(&app, "en").await;
	assert_eq!(en["footer"]["links"], json!(["Privacy", "Terms"]));
}

#[tokio::test]
async fn test_key_in_one_bundle_only() {
	let (app, _dir) = create_test_app().await;

	let row = listing_row(&app, "promo.fr_only").await;
	assert_eq!(row["section"], "promo");
	assert_eq!(
		row["values"],
		json!({ "en": "", "fr": "Offre du mois", "nl": "" })
	);
	assert_eq!(
		row["isOverridden"],
		json!({ "en": false, "fr": false, "nl": false })
	);
}

#[tokio::test]
async fn test_listing_groups_sections() {
	let (app, _dir) = create_test_app().await;

	let listing = body_json(get(&app, "/api/translations").await).await;
	assert_eq!(
		listing["sections"],
		json!({
			"footer": ["footer.title"],
			"hero": ["hero.subtitle", "hero.title"],
			"promo": ["promo.fr_only"]
		})
	);
}

#[tokio::test]
async fn test_save_leaves_other_locales_untouched() {
	let (app, _dir) = create_test_app().await;

	save(
		&app,
		json!({ "key": "hero.title", "values": { "fr": "Salut", "nl": "Hallo" } }),
	)
	.await;
	save(&app, json!({ "key": "hero.title", "values": { "fr": "Coucou" } })).await;

	let row = listing_row(&app, "hero.title").await;
	assert_eq!(
		row["values"],
		json!({ "en": "Welcome", "fr": "Coucou", "nl": "Hallo" })
	);
	assert_eq!(
		row["isOverridden"],
		json!({ "en": false, "fr": true, "nl": true })
	);
}

#[tokio::test]
async fn test_save_trims_values() {
	let (app, _dir) = create_test_app().await;

	save(
		&app,
		json!({ "key": "  hero.subtitle ", "values": { "nl": "  Zachte zorg \n" } }),
	)
	.await;

	assert_eq!(messages(&app, "nl").await["hero"]["subtitle"], "Zachte zorg");
}

#[tokio::test]
async fn test_blank_key_is_rejected() {
	let (app, _dir) = create_test_app().await;

	let response = save(&app, json!({ "key": "   ", "values": { "en": "Hello" } })).await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let body = body_json(response).await;
	assert_eq!(body["error"], "bad_request");

	let row = listing_row(&app, "hero.title").await;
	assert_eq!(row["isOverridden"]["en"], false);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
	let (app, _dir) = create_test_app().await;

	let response = save(&app, json!({ "values": { "en": "Hello" } })).await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(response).await["error"], "bad_request");
}

#[tokio::test]
async fn test_override_for_unknown_key_is_merged() {
	let (app, _dir) = create_test_app().await;

	save(
		&app,
		json!({ "key": "banner.notice", "values": { "en": "Closed Monday" } }),
	)
	.await;

	let en = messages(&app, "en").await;
	assert_eq!(en["banner"]["notice"], "Closed Monday");
}

#[tokio::test]
async fn test_unsupported_locale_is_not_found() {
	let (app, _dir) = create_test_app().await;

	let response = get(&app, "/api/messages/de").await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(body_json(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_missing_bundle_is_not_found() {
	let catalog = MessageCatalog::from_bundles([(Locale::En, tree(json!({ "a": "b" })))]);
	let (app, _dir) = create_test_app_with(catalog).await;

	let response = get(&app, "/api/messages/nl").await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let response = get(&app, "/api/messages/en").await;
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_store_read_failure_is_internal_error() {
	let (app, _dir) = create_app_without_override_table().await;

	for uri in ["/api/translations", "/api/messages/en", "/api/messages?locale=fr"] {
		let response = get(&app, uri).await;
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

		let body = body_json(response).await;
		assert_eq!(body["error"], "internal_error", "{uri}");
		assert!(!body["message"].as_str().unwrap().contains("translation_overrides"));
	}
}

#[tokio::test]
async fn test_store_write_failure_is_partial_write() {
	let (app, _dir) = create_app_without_override_table().await;

	let response = save(
		&app,
		json!({ "key": "hero.title", "values": { "en": "Hi", "fr": "Salut" } }),
	)
	.await;
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = body_json(response).await;
	assert_eq!(body["error"], "partial_write");
	assert!(body["message"].as_str().unwrap().ends_with("in: en, fr"));
}

#[tokio::test]
async fn test_messages_response_shape() {
	let (app, _dir) = create_test_app().await;

	let response = get(&app, "/api/messages/fr").await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.headers().get(header::CONTENT_LANGUAGE).unwrap(),
		"fr"
	);

	let body = body_json(response).await;
	assert_eq!(body["locale"], "fr");
	assert_eq!(
		body["title"],
		"Taramar – Soin de la peau naturel au quotidien"
	);
	assert_eq!(body["messages"]["promo"]["fr_only"], "Offre du mois");
}

#[tokio::test]
async fn test_negotiated_messages_use_query_then_header() {
	let (app, _dir) = create_test_app().await;

	let body = body_json(get(&app, "/api/messages?locale=nl").await).await;
	assert_eq!(body["locale"], "nl");

	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.uri("/api/messages?locale=de")
				.header(header::ACCEPT_LANGUAGE, "fr-BE,fr;q=0.9,en;q=0.5")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await["locale"], "fr");

	let body = body_json(get(&app, "/api/messages").await).await;
	assert_eq!(body["locale"], "en");
}

#[tokio::test]
async fn test_list_locales() {
	let (app, _dir) = create_test_app().await;

	let body = body_json(get(&app, "/api/locales").await).await;
	assert_eq!(body["default_locale"], "en");
	let codes: Vec<&str> = body["locales"]
		.as_array()
		.unwrap()
		.iter()
		.map(|l| l["code"].as_str().unwrap())
		.collect();
	assert_eq!(codes, vec!["en", "fr", "nl"]);
}

#[tokio::test]
async fn test_health_check() {
	let (app, _dir) = create_test_app().await;

	let response = get(&app, "/health").await;
	assert_eq!(response.status(), StatusCode::OK);

	let health = body_json(response).await;
	assert_eq!(health["status"], "healthy");
	assert_eq!(health["components"]["database"]["status"], "healthy");
	assert_eq!(
		health["components"]["bundles"]["loaded"],
		json!(["en", "fr", "nl"])
	);
	assert!(health.get("version").is_some());
}

#[tokio::test]
async fn test_health_degraded_with_missing_bundle() {
	let catalog = MessageCatalog::from_bundles([(Locale::En, tree(json!({ "a": "b" })))]);
	let (app, _dir) = create_test_app_with(catalog).await;

	let response = get(&app, "/health").await;
	assert_eq!(response.status(), StatusCode::OK);
	let health = body_json(response).await;
	assert_eq!(health["status"], "degraded");
	assert_eq!(
		health["components"]["bundles"]["missing"],
		json!(["fr", "nl"])
	);
}

#[tokio::test]
async fn test_openapi_document_served() {
	let (app, _dir) = create_test_app().await;

	let response = get(&app, "/api/openapi.json").await;
	assert_eq!(response.status(), StatusCode::OK);
	let doc = body_json(response).await;
	assert!(doc["paths"].get("/api/translations/save").is_some());
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(16))]

	/// Whatever an editor saves is what the next render sees, trimmed.
	#[test]
	fn saved_value_is_rendered(value in "[a-zA-Z0-9 ]{1,24}[a-zA-Z0-9]") {
		let rt = tokio::runtime::Runtime::new().unwrap();
		rt.block_on(async {
			let (app, _dir) = create_test_app().await;

			let response = save(
				&app,
				json!({ "key": "hero.title", "values": { "nl": value.clone() } }),
			)
			.await;
			assert_eq!(response.status(), StatusCode::OK);

			let nl = messages(&app, "nl").await;
			assert_eq!(nl["hero"]["title"], value.trim());
			let fr = messages(&app, "fr").await;
			assert_eq!(fr["hero"]["title"], "Bienvenue");
		});
	}
}
