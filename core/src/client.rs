//! Typed client facade for the vaccination registry API.
//!
//! # Design
//! `CowinClient` holds an immutable `RequestComposer` (config plus shared
//! route table) and a `Transport`. It carries no state between calls: each
//! method builds a `RequestSpec`, composes it, executes it, classifies the
//! status and decodes the body. Authentication state lives in a
//! caller-owned `AuthSession`; see `auth`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::classify::check_status;
use crate::codec::decode;
use crate::compose::{RequestComposer, RequestSpec};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpResponse, Transport};
use crate::routes::{route, RouteTable};
use crate::types::{
    CalendarResponse, CenterCalendar, CentersResponse, DistrictsResponse, SessionsResponse,
    SingleCenterCalendarResponse, StatesResponse,
};

#[derive(Debug, Clone)]
pub struct CowinClient<T> {
    composer: RequestComposer,
    transport: T,
}

#[cfg(feature = "ureq")]
impl CowinClient<crate::transport::UreqTransport> {
    /// Client backed by a blocking `ureq` agent.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> CowinClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self::with_routes(config, Arc::new(RouteTable::standard()), transport)
    }

    /// Build a client over an existing route table, e.g. to share one table
    /// between several clients.
    pub fn with_routes(config: ClientConfig, routes: Arc<RouteTable>, transport: T) -> Self {
        Self {
            composer: RequestComposer::new(config, routes),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.composer.config()
    }

    pub fn composer(&self) -> &RequestComposer {
        &self.composer
    }

    /// Compose, execute and classify. Error statuses never reach the caller
    /// as a response.
    pub fn execute(&self, spec: RequestSpec<'_>) -> Result<HttpResponse, ApiError> {
        let request = self.composer.compose(spec)?;
        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
        let response = self.transport.execute(&request)?;
        check_status(&response)?;
        Ok(response)
    }

    pub(crate) fn fetch<R: DeserializeOwned>(&self, spec: RequestSpec<'_>) -> Result<R, ApiError> {
        let response = self.execute(spec)?;
        decode(&response.body)
    }

    pub fn get_states(&self) -> Result<StatesResponse, ApiError> {
        self.fetch(RequestSpec::new(route::GET_STATES))
    }

    pub fn get_districts(&self, state_id: u32) -> Result<DistrictsResponse, ApiError> {
        self.fetch(RequestSpec::new(route::GET_DISTRICTS).suffix(format!("/{state_id}")))
    }

    /// Sessions at centers in `pincode` on `date` (`DD-MM-YYYY`; empty to
    /// let the service pick).
    pub fn find_sessions_by_pin(&self, pincode: &str, date: &str) -> Result<SessionsResponse, ApiError> {
        self.fetch(
            RequestSpec::new(route::FIND_BY_PIN)
                .query("pincode", pincode)
                .optional_query("date", date),
        )
    }

    pub fn find_sessions_by_district(
        &self,
        district_id: u32,
        date: &str,
    ) -> Result<SessionsResponse, ApiError> {
        self.fetch(
            RequestSpec::new(route::FIND_BY_DISTRICT)
                .query("district_id", district_id.to_string())
                .optional_query("date", date),
        )
    }

    pub fn find_centers_by_lat_long(&self, lat: f64, long: f64) -> Result<CentersResponse, ApiError> {
        self.fetch(
            RequestSpec::new(route::FIND_BY_LAT_LONG)
                .query("lat", format!("{lat:.6}"))
                .query("long", format!("{long:.6}")),
        )
    }

    /// Week-long calendar for every center in `pincode`, starting at `date`.
    pub fn calendar_by_pin(&self, pincode: &str, date: &str) -> Result<CalendarResponse, ApiError> {
        self.fetch(
            RequestSpec::new(route::CAL_BY_PIN)
                .query("pincode", pincode)
                .optional_query("date", date),
        )
    }

    pub fn calendar_by_district(&self, district_id: u32, date: &str) -> Result<CalendarResponse, ApiError> {
        self.fetch(
            RequestSpec::new(route::CAL_BY_DISTRICT)
                .query("district_id", district_id.to_string())
                .optional_query("date", date),
        )
    }

    pub fn calendar_by_center(&self, center_id: u64, date: &str) -> Result<CenterCalendar, ApiError> {
        let response: SingleCenterCalendarResponse = self.fetch(
            RequestSpec::new(route::CAL_BY_CENTER)
                .query("center_id", center_id.to_string())
                .optional_query("date", date),
        )?;
        Ok(response.center)
    }

    /// Download a vaccination certificate. Returns the raw document bytes.
    ///
    /// `token` comes from a confirmed `AuthSession`. A stale token yields
    /// `ApiError::Unauthorized`; nothing is refreshed automatically.
    pub fn download_certificate(&self, beneficiary_reference_id: &str, token: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.execute(
            RequestSpec::new(route::DOWNLOAD_CERT)
                .query("beneficiary_reference_id", beneficiary_reference_id)
                .bearer(token),
        )?;
        Ok(response.body)
    }
}
