use axum::body::{to_bytes, Body};
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use graves_cli::server::{self, parse_grave_id, ApiError, AppState, NOT_FOUND_DETAIL};
use graves_core::{FilterCriteria, GraveDb, LogicalField};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn state() -> AppState {
    let db = GraveDb::from_json_str(
        &json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "g-1",
                    "geometry": { "type": "Point", "coordinates": [21.01, 52.22] },
                    "properties": { "imie": "Jan", "nazwisko": "Kowalski" }
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [21.02, 52.23] },
                    "properties": { "IMIE": "Anna", "NAZWISKO": "Nowak", "Data ┼Ť": "1944-08-01" }
                }
            ]
        })
        .to_string(),
    )
    .unwrap();
    AppState::new(Arc::new(db))
}

fn query(pairs: &str) -> Query<FilterCriteria> {
    let uri: Uri = format!("http://localhost/api/graves?{pairs}").parse().unwrap();
    Query::try_from_uri(&uri).unwrap()
}

#[tokio::test]
async fn list_without_filters_returns_all() {
    let body = server::list_graves(State(state()), query("")).await.0;
    assert_eq!(body.kind, "FeatureCollection");
    assert_eq!(body.features.len(), 2);
    assert_eq!(body.features[0].extra.get("id"), Some(&json!("g-1")));
}

#[tokio::test]
async fn list_filters_by_last_name() {
    let body = server::list_graves(State(state()), query("nazwisko=kow")).await.0;
    assert_eq!(body.features.len(), 1);
    assert_eq!(body.features[0].properties.as_ref().unwrap()["imie"], "Jan");
}

#[tokio::test]
async fn query_parameters_map_to_fields() {
    let Query(c) = query("imie=an&data_smierci=1944&data_urodzenia=");
    assert_eq!(c.get(LogicalField::FirstName), Some("an"));
    assert_eq!(c.get(LogicalField::DeathDate), Some("1944"));
    assert_eq!(c.get(LogicalField::BirthDate), Some(""));
    assert_eq!(c.get(LogicalField::LastName), None);

    let body = server::list_graves(State(state()), Query(c)).await.0;
    assert_eq!(body.features.len(), 1);
    assert_eq!(body.features[0].properties.as_ref().unwrap()["NAZWISKO"], "Nowak");
}

#[tokio::test]
async fn list_with_no_match_is_empty_collection() {
    let body = server::list_graves(State(state()), query("nazwisko=zzz")).await.0;
    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v, json!({ "type": "FeatureCollection", "features": [] }));
}

#[tokio::test]
async fn get_returns_feature_at_position() {
    let feature = server::get_grave(State(state()), Path("1".to_owned())).await.unwrap().0;
    assert_eq!(feature.properties.as_ref().unwrap()["IMIE"], "Anna");
}

#[tokio::test]
async fn get_out_of_range_is_404() {
    for id in ["2", "5", "-1"] {
        let err: ApiError = server::get_grave(State(state()), Path(id.to_owned()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail, NOT_FOUND_DETAIL);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}

#[test]
fn grave_ids_accept_any_integer() {
    assert_eq!(parse_grave_id("0").unwrap(), 0);
    assert_eq!(parse_grave_id("+7").unwrap(), 7);
    assert_eq!(parse_grave_id("-3").unwrap(), -3);
    assert_eq!(parse_grave_id("99999999999999999999").unwrap(), i64::MAX);
    assert_eq!(parse_grave_id("-99999999999999999999").unwrap(), i64::MIN);
    for bad in ["", "-", "abc", "1.5", "1e3", " 1", "++1"] {
        let err = parse_grave_id(bad).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST, "{bad:?}");
    }
}

async fn send(uri: &str, origin: Option<&str>) -> Response {
    let mut req = Request::builder().uri(uri);
    if let Some(origin) = origin {
        req = req.header(header::ORIGIN, origin);
    }
    server::router(state())
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn routed_list_applies_query_filters() {
    let resp = send("/api/graves?nazwisko=kow", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(body["features"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["features"][0]["properties"]["nazwisko"], "Kowalski");
    assert_eq!(body["features"][0]["id"], "g-1");
}

#[tokio::test]
async fn routed_get_returns_feature() {
    let resp = send("/api/graves/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["type"], "Feature");
    assert_eq!(body["properties"]["IMIE"], "Anna");
    assert_eq!(body["geometry"]["coordinates"], json!([21.02, 52.23]));
}

#[tokio::test]
async fn routed_out_of_range_ids_are_404_with_detail() {
    for uri in [
        "/api/graves/5",
        "/api/graves/-1",
        "/api/graves/99999999999999999999",
    ] {
        let resp = send(uri, None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(json_body(resp).await, json!({ "detail": NOT_FOUND_DETAIL }), "{uri}");
    }
}

#[tokio::test]
async fn routed_non_integer_id_is_400_with_detail() {
    let resp = send("/api/graves/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("integer")));
}

#[tokio::test]
async fn cors_allows_browser_origins() {
    let resp = send("/api/graves", Some("http://127.0.0.1:5500")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://127.0.0.1:5500")
    );
}
