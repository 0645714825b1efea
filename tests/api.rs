use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use epicalc::{api, config::Settings};
use serde_json::Value;
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = api::router(Settings::default())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn post_metrics(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/metrics")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn computes_metrics_for_a_table() {
    let (status, body) = send(post_metrics(
        r#"{"a":20,"b":80,"c":5,"d":95,"design":"cohort-prospective","goal":"undesirable"}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["design"], "cohort-prospective");
    let metrics = &body["metrics"];
    assert_eq!(metrics["nnt"]["type"], "Harm");
    assert_eq!(metrics["relativeRisk"]["pValue"], "0.0038");
    assert_eq!(
        metrics["impactMeasures"]["absolute"]["label"],
        "Absolute Risk Increase (ARI)"
    );
    assert!((metrics["relativeRisk"]["value"].as_f64().unwrap() - 4.0).abs() < 1e-9);
}

#[tokio::test]
async fn defaults_apply_and_nulls_are_explicit() {
    let (status, body) = send(post_metrics(r#"{"a":10,"b":0,"c":0,"d":10}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["design"], "rct");
    assert_eq!(body["goal"], "undesirable");
    assert!(body["metrics"]["oddsRatio"].is_null());
    assert!(body["metrics"]["power"].is_null());
    assert_eq!(body["metrics"]["type1Error"], 0.05);
}

#[tokio::test]
async fn infinite_bounds_are_serialized_as_strings() {
    // zero exposed risk puts the log relative risk at -inf
    let (status, body) = send(post_metrics(r#"{"a":0,"b":100,"c":10,"d":90}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"]["relativeRisk"]["zStat"], "-Infinity");
    assert_eq!(body["metrics"]["relativeRisk"]["pValue"], "<0.0001");
}

#[tokio::test]
async fn accepts_counts_at_u64_max() {
    let (status, body) = send(post_metrics(
        r#"{"a":18446744073709551615,"b":1,"c":5,"d":5}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["table"]["a"], u64::MAX);
    assert_eq!(body["metrics"]["absoluteRiskControl"], 0.5);
}

#[tokio::test]
async fn negative_counts_are_rejected() {
    let (status, body) = send(post_metrics(r#"{"a":-1,"b":80,"c":5,"d":95}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn sample_size_endpoint() {
    let request = Request::builder()
        .uri("/sample-size?p1=0.2&p2=0.05")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["perGroup"], 76);

    let request = Request::builder()
        .uri("/sample-size?p1=0.2&p2=0.2")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send(request).await;
    assert!(body["perGroup"].is_null());

    let request = Request::builder()
        .uri("/sample-size?p1=high")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
