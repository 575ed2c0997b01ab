//! In-process imitation of the CoWIN registry API.
//!
//! Serves every public route plus the OTP handshake and the protected
//! certificate download under `/api`, backed by fixed fixture data. OTP
//! confirmation accepts the SHA-256 of `MOCK_OTP` for any transaction this
//! server issued.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// The code every issued OTP "was".
pub const MOCK_OTP: &str = "123456";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    pub error: String,
}

#[derive(Deserialize)]
pub struct GenerateOtp {
    pub mobile: String,
}

#[derive(Deserialize)]
pub struct ConfirmOtp {
    pub otp: String,
    #[serde(rename = "txnId")]
    pub txn_id: String,
}

#[derive(Deserialize)]
pub struct PinQuery {
    pub pincode: String,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct DistrictQuery {
    pub district_id: u32,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct CenterQuery {
    pub center_id: u64,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct LatLongQuery {
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize)]
pub struct CertificateQuery {
    pub beneficiary_reference_id: String,
}

/// Issued transaction ids (with their mobile) and bearer tokens.
#[derive(Default)]
pub struct AuthStore {
    pub transactions: HashMap<String, String>,
    pub tokens: HashSet<String>,
}

pub type Db = Arc<RwLock<AuthStore>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(AuthStore::default()));
    let api = Router::new()
        .route("/v2/auth/public/generateOTP", post(generate_otp))
        .route("/v2/auth/public/confirmOTP", post(confirm_otp))
        .route("/v2/admin/location/states", get(list_states))
        .route("/v2/admin/location/districts/{state_id}", get(list_districts))
        .route("/v2/appointment/sessions/public/findByPin", get(find_by_pin))
        .route("/v2/appointment/sessions/public/findByDistrict", get(find_by_district))
        .route("/v2/appointment/centers/public/findByLatLong", get(find_by_lat_long))
        .route("/v2/appointment/sessions/public/calendarByPin", get(calendar_by_pin))
        .route("/v2/appointment/sessions/public/calendarByDistrict", get(calendar_by_district))
        .route("/v2/appointment/sessions/public/calendarByCenter", get(calendar_by_center))
        .route("/v2/registration/certificate/public/download", get(download_certificate))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock registry listening");
    }
    axum::serve(listener, app()).await
}

pub fn sign(otp: &str) -> String {
    hex::encode(Sha256::digest(otp.as_bytes()))
}

fn error(status: StatusCode, code: &str, message: &str) -> Response {
    let body = ErrorBody {
        error_code: code.to_string(),
        error: message.to_string(),
    };
    (status, Json(body)).into_response()
}

async fn generate_otp(State(db): State<Db>, Json(input): Json<GenerateOtp>) -> Response {
    let valid = input.mobile.len() == 10 && input.mobile.bytes().all(|b| b.is_ascii_digit());
    if !valid {
        return error(StatusCode::BAD_REQUEST, "USRAUT0001", "Invalid mobile number");
    }
    let txn_id = Uuid::new_v4().to_string();
    debug!(%txn_id, "issued OTP transaction");
    db.write().await.transactions.insert(txn_id.clone(), input.mobile);
    Json(json!({ "txnId": txn_id })).into_response()
}

async fn confirm_otp(State(db): State<Db>, Json(input): Json<ConfirmOtp>) -> Response {
    let mut store = db.write().await;
    if !store.transactions.contains_key(&input.txn_id) {
        return error(StatusCode::BAD_REQUEST, "USRAUT0004", "Invalid transaction id");
    }
    if input.otp != sign(MOCK_OTP) {
        return error(StatusCode::UNAUTHORIZED, "USRAUT0014", "Invalid OTP");
    }
    let token = Uuid::new_v4().to_string();
    store.tokens.insert(token.clone());
    Json(json!({ "token": token })).into_response()
}

async fn list_states() -> Json<Value> {
    Json(json!({
        "states": [
            { "state_id": 1, "state_name": "Andaman and Nicobar Islands", "state_name_l": "" },
            { "state_id": 9, "state_name": "Delhi", "state_name_l": "दिल्ली" }
        ],
        "ttl": 24
    }))
}

async fn list_districts(Path(state_id): Path<u32>) -> Response {
    let districts = match state_id {
        1 => json!([
            { "state_id": 1, "district_id": 3, "district_name": "Nicobar", "district_name_l": "" },
            { "state_id": 1, "district_id": 1, "district_name": "North and Middle Andaman", "district_name_l": "" }
        ]),
        9 => json!([
            { "state_id": 9, "district_id": 141, "district_name": "Central Delhi", "district_name_l": "" }
        ]),
        _ => json!([]),
    };
    Json(json!({ "districts": districts, "ttl": 24 })).into_response()
}

fn center(center_id: u64) -> Value {
    json!({
        "center_id": center_id,
        "name": "Connaught Place PHC",
        "name_l": "",
        "address": "Baba Kharak Singh Marg",
        "address_l": "",
        "state_name": "Delhi",
        "state_name_l": "",
        "district_name": "Central Delhi",
        "district_name_l": "",
        "block_name": "New Delhi",
        "block_name_l": "",
        "pincode": 110001,
        "lat": 28.63,
        "long": 77.21,
        "from": "09:00:00",
        "to": "17:00:00",
        "fee_type": "Paid"
    })
}

fn session(center_id: u64, date: &str) -> Value {
    let mut value = center(center_id);
    if let Some(fields) = value.as_object_mut() {
        fields.insert("session_id".into(), json!(format!("{center_id}-{date}")));
        fields.insert("date".into(), json!(date));
        fields.insert("fee".into(), json!("780"));
        fields.insert("available_capacity".into(), json!(10));
        fields.insert("available_capacity_dose1".into(), json!(6));
        fields.insert("available_capacity_dose2".into(), json!(4));
        fields.insert("min_age_limit".into(), json!(18));
        fields.insert("vaccine".into(), json!("COVISHIELD"));
        fields.insert("slots".into(), json!(["09:00AM-11:00AM", "11:00AM-01:00PM"]));
    }
    value
}

fn calendar(center_id: u64, date: &str) -> Value {
    let mut value = center(center_id);
    if let Some(fields) = value.as_object_mut() {
        fields.insert(
            "vaccine_fees".into(),
            json!([{ "vaccine": "COVISHIELD", "fee": "780" }]),
        );
        fields.insert(
            "sessions".into(),
            json!([{
                "session_id": format!("{center_id}-{date}"),
                "date": date,
                "available_capacity": 10,
                "min_age_limit": 18,
                "vaccine": "COVISHIELD",
                "slots": ["09:00AM-11:00AM"]
            }]),
        );
    }
    value
}

fn date_or_default(date: Option<String>) -> String {
    date.filter(|d| !d.is_empty())
        .unwrap_or_else(|| "01-05-2021".to_string())
}

async fn find_by_pin(Query(query): Query<PinQuery>) -> Response {
    if query.pincode.len() != 6 {
        return error(StatusCode::BAD_REQUEST, "APPOIN0018", "Invalid Pincode");
    }
    let date = date_or_default(query.date);
    let sessions = if query.pincode == "110001" {
        json!([session(1203, &date)])
    } else {
        json!([])
    };
    Json(json!({ "sessions": sessions })).into_response()
}

async fn find_by_district(Query(query): Query<DistrictQuery>) -> Json<Value> {
    let date = date_or_default(query.date);
    let sessions = if query.district_id == 141 {
        json!([session(1203, &date)])
    } else {
        json!([])
    };
    Json(json!({ "sessions": sessions }))
}

async fn find_by_lat_long(Query(query): Query<LatLongQuery>) -> Json<Value> {
    Json(json!({
        "centers": [{
            "center_id": 1203,
            "name": "Connaught Place PHC",
            "district_name": "Central Delhi",
            "state_name": "Delhi",
            "pincode": "110001",
            "lat": format!("{:.4}", query.lat),
            "long": format!("{:.4}", query.long),
            "from": "09:00:00",
            "to": "17:00:00",
            "fee_type": "Paid"
        }],
        "ttl": 24
    }))
}

async fn calendar_by_pin(Query(query): Query<PinQuery>) -> Json<Value> {
    let date = date_or_default(query.date);
    let centers = if query.pincode == "110001" {
        json!([calendar(1203, &date)])
    } else {
        json!([])
    };
    Json(json!({ "centers": centers }))
}

async fn calendar_by_district(Query(query): Query<DistrictQuery>) -> Json<Value> {
    let date = date_or_default(query.date);
    let centers = if query.district_id == 141 {
        json!([calendar(1203, &date)])
    } else {
        json!([])
    };
    Json(json!({ "centers": centers }))
}

async fn calendar_by_center(Query(query): Query<CenterQuery>) -> Json<Value> {
    let date = date_or_default(query.date);
    Json(json!({ "centers": calendar(query.center_id, &date) }))
}

async fn download_certificate(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<CertificateQuery>,
) -> Response {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let authorized = match token {
        Some(token) => db.read().await.tokens.contains(token),
        None => false,
    };
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "Unauthenticated access!").into_response();
    }
    let body = format!(
        "%PDF-1.4\n% certificate for beneficiary {}\n",
        query.beneficiary_reference_id
    );
    ([(header::CONTENT_TYPE, "application/pdf")], body).into_response()
}
