use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, sign, MOCK_OTP};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- location ---

#[tokio::test]
async fn states_are_listed_with_ttl() {
    let resp = app().oneshot(get("/api/v2/admin/location/states")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ttl"], 24);
    assert_eq!(body["states"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn districts_for_unknown_state_are_empty() {
    let resp = app().oneshot(get("/api/v2/admin/location/districts/5")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["districts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_state_id_is_rejected() {
    let resp = app().oneshot(get("/api/v2/admin/location/districts/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- appointments ---

#[tokio::test]
async fn find_by_pin_without_date() {
    let resp = app()
        .oneshot(get("/api/v2/appointment/sessions/public/findByPin?pincode=110001"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["sessions"][0]["center_id"], 1203);
}

#[tokio::test]
async fn find_by_pin_rejects_short_pincode_with_error_body() {
    let resp = app()
        .oneshot(get("/api/v2/appointment/sessions/public/findByPin?pincode=11"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["errorCode"], "APPOIN0018");
}

#[tokio::test]
async fn calendar_by_center_wraps_single_object() {
    let resp = app()
        .oneshot(get(
            "/api/v2/appointment/sessions/public/calendarByCenter?center_id=7&date=02-05-2021",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["centers"]["center_id"], 7);
    assert_eq!(body["centers"]["sessions"][0]["date"], "02-05-2021");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/api/v2/appointment/nothing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- auth ---

#[tokio::test]
async fn generate_otp_rejects_bad_mobile() {
    let resp = app()
        .oneshot(json_request("/api/v2/auth/public/generateOTP", r#"{"mobile":"12345"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["errorCode"], "USRAUT0001");
}

#[tokio::test]
async fn certificate_requires_bearer_token() {
    let resp = app()
        .oneshot(get(
            "/api/v2/registration/certificate/public/download?beneficiary_reference_id=1",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn otp_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // generate
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/api/v2/auth/public/generateOTP", r#"{"mobile":"9999999999"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let txn_id = body_json(resp).await["txnId"].as_str().unwrap().to_string();
    assert!(!txn_id.is_empty());

    // confirm with the wrong code
    let wrong = format!(r#"{{"otp":"{}","txnId":"{txn_id}"}}"#, sign("000000"));
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/api/v2/auth/public/confirmOTP", &wrong))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // confirm with the right code, same transaction
    let right = format!(r#"{{"otp":"{}","txnId":"{txn_id}"}}"#, sign(MOCK_OTP));
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/api/v2/auth/public/confirmOTP", &right))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token = body_json(resp).await["token"].as_str().unwrap().to_string();

    // download
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri("/api/v2/registration/certificate/public/download?beneficiary_reference_id=42")
                .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let body = body_bytes(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn confirm_unknown_transaction_is_bad_request() {
    let body = format!(r#"{{"otp":"{}","txnId":"nope"}}"#, sign(MOCK_OTP));
    let resp = app()
        .oneshot(json_request("/api/v2/auth/public/confirmOTP", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
