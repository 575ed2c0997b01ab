//! Domain records for the registry API.
//!
//! # Design
//! These mirror the service's JSON shapes. They are only ever produced by
//! decoding a response body and are never mutated afterwards. Identifiers and
//! the list fields that define a response are required, so a body of some
//! other shape fails to decode as a whole. Localised (`*_l`) and auxiliary
//! fields default when the service omits them; calendar sessions, for
//! example, carry no center details.
//!
//! Coordinates are plain degrees. The service is the authority on their
//! range and nothing here validates them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A state listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub state_id: u32,
    pub state_name: String,
    #[serde(default)]
    pub state_name_l: String,
}

/// A district within a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    #[serde(default)]
    pub state_id: u32,
    pub district_id: u32,
    pub district_name: String,
    #[serde(default)]
    pub district_name_l: String,
}

/// Response of `get_states`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatesResponse {
    pub states: Vec<State>,
    #[serde(default)]
    pub ttl: u32,
}

/// Response of `get_districts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictsResponse {
    pub districts: Vec<District>,
    #[serde(default)]
    pub ttl: u32,
}

/// One vaccination session at a center on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationSession {
    pub session_id: String,
    pub date: String,
    #[serde(default)]
    pub center_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_l: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_l: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub state_name_l: String,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub district_name_l: String,
    #[serde(default)]
    pub block_name: String,
    #[serde(default)]
    pub block_name_l: String,
    #[serde(default)]
    pub pincode: u32,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
    #[serde(default, rename = "from")]
    pub from_time: String,
    #[serde(default, rename = "to")]
    pub to_time: String,
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub available_capacity: u32,
    #[serde(default)]
    pub available_capacity_dose1: u32,
    #[serde(default)]
    pub available_capacity_dose2: u32,
    #[serde(default)]
    pub min_age_limit: u32,
    #[serde(default)]
    pub vaccine: String,
    #[serde(default)]
    pub slots: Vec<String>,
}

/// Response of the `find_sessions_by_*` operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<VaccinationSession>,
}

/// A vaccination center found by coordinates. The service sends pincode and
/// coordinates as strings on this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationCenter {
    pub center_id: u64,
    pub name: String,
    #[serde(default)]
    pub name_l: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_l: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub state_name_l: String,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub district_name_l: String,
    #[serde(default)]
    pub block_name: String,
    #[serde(default)]
    pub block_name_l: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub long: String,
    #[serde(default, rename = "from")]
    pub from_time: String,
    #[serde(default, rename = "to")]
    pub to_time: String,
    #[serde(default)]
    pub fee_type: String,
}

/// Response of `find_centers_by_lat_long`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentersResponse {
    pub centers: Vec<VaccinationCenter>,
    #[serde(default)]
    pub ttl: u32,
}

/// Fee charged for one vaccine at a paid center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineFee {
    pub vaccine: String,
    pub fee: String,
}

/// A center with its sessions over the coming week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterCalendar {
    pub center_id: u64,
    pub name: String,
    #[serde(default)]
    pub name_l: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address_l: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub state_name_l: String,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub district_name_l: String,
    #[serde(default)]
    pub block_name: String,
    #[serde(default)]
    pub block_name_l: String,
    #[serde(default)]
    pub pincode: u32,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
    #[serde(default, rename = "from")]
    pub from_time: String,
    #[serde(default, rename = "to")]
    pub to_time: String,
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub vaccine_fees: Vec<VaccineFee>,
    pub sessions: Vec<VaccinationSession>,
}

/// Response of `calendar_by_pin` and `calendar_by_district`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub centers: Vec<CenterCalendar>,
}

/// Response of `calendar_by_center`: the service reuses the `centers` key
/// for a single object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SingleCenterCalendarResponse {
    #[serde(rename = "centers")]
    pub center: CenterCalendar,
}

/// Request payload for `request_otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRequest {
    pub mobile: String,
}

/// Response of `request_otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpResponse {
    #[serde(rename = "txnId")]
    pub txn_id: String,
}

/// Request payload for `confirm_otp`. `otp` is always the signed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpConfirmRequest {
    pub otp: String,
    #[serde(rename = "txnId")]
    pub txn_id: String,
}

/// Response of `confirm_otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpConfirmResponse {
    pub token: String,
}

/// Structured error body sent alongside 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "errorCode")]
    pub code: String,
    #[serde(rename = "error")]
    pub message: String,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}
