//! Route table: logical operation names to endpoint descriptors.
//!
//! The table is built once and then only read. Clients hold it behind an
//! `Arc`, so clones share one copy and concurrent calls need no locking.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::http::HttpMethod;

/// Route names understood by `RouteTable::lookup`.
pub mod route {
    pub const REQUEST_OTP: &str = "request_otp";
    pub const CONFIRM_OTP: &str = "confirm_otp";
    pub const GET_STATES: &str = "get_states";
    pub const GET_DISTRICTS: &str = "get_districts";
    pub const FIND_BY_PIN: &str = "find_by_pin";
    pub const FIND_BY_DISTRICT: &str = "find_by_district";
    pub const FIND_BY_LAT_LONG: &str = "find_by_lat_long";
    pub const CAL_BY_PIN: &str = "cal_by_pin";
    pub const CAL_BY_DISTRICT: &str = "cal_by_district";
    pub const CAL_BY_CENTER: &str = "cal_by_center";
    pub const DOWNLOAD_CERT: &str = "download_cert";
}

/// Every path starts with this version prefix.
pub const API_VERSION_PREFIX: &str = "/v2/";

/// One external endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    /// Path template relative to the base URL. Operations that take a
    /// variable segment expect the caller to supply it, separator included,
    /// as the path suffix.
    pub path: &'static str,
    pub method: HttpMethod,
    pub requires_auth: bool,
}

const fn public(name: &'static str, method: HttpMethod, path: &'static str) -> Operation {
    Operation {
        name,
        path,
        method,
        requires_auth: false,
    }
}

const OPERATIONS: [Operation; 11] = [
    public(route::REQUEST_OTP, HttpMethod::Post, "/v2/auth/public/generateOTP"),
    public(route::CONFIRM_OTP, HttpMethod::Post, "/v2/auth/public/confirmOTP"),
    public(route::GET_STATES, HttpMethod::Get, "/v2/admin/location/states"),
    public(route::GET_DISTRICTS, HttpMethod::Get, "/v2/admin/location/districts"),
    public(route::FIND_BY_PIN, HttpMethod::Get, "/v2/appointment/sessions/public/findByPin"),
    public(route::FIND_BY_DISTRICT, HttpMethod::Get, "/v2/appointment/sessions/public/findByDistrict"),
    public(route::FIND_BY_LAT_LONG, HttpMethod::Get, "/v2/appointment/centers/public/findByLatLong"),
    public(route::CAL_BY_PIN, HttpMethod::Get, "/v2/appointment/sessions/public/calendarByPin"),
    public(route::CAL_BY_DISTRICT, HttpMethod::Get, "/v2/appointment/sessions/public/calendarByDistrict"),
    public(route::CAL_BY_CENTER, HttpMethod::Get, "/v2/appointment/sessions/public/calendarByCenter"),
    Operation {
        name: route::DOWNLOAD_CERT,
        path: "/v2/registration/certificate/public/download",
        method: HttpMethod::Get,
        requires_auth: true,
    },
];

/// Immutable mapping from operation name to `Operation`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    operations: HashMap<&'static str, Operation>,
}

impl RouteTable {
    /// The registry's fixed set of operations.
    pub fn standard() -> Self {
        Self {
            operations: OPERATIONS.iter().map(|op| (op.name, *op)).collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&Operation, ApiError> {
        self.operations
            .get(name)
            .ok_or_else(|| ApiError::UnknownOperation(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        assert_eq!(RouteTable::standard().len(), OPERATIONS.len());
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = OPERATIONS.iter().map(|op| op.path).collect();
        assert_eq!(paths.len(), OPERATIONS.len());
    }

    #[test]
    fn every_path_carries_version_prefix() {
        for op in RouteTable::standard().iter() {
            assert!(op.path.starts_with(API_VERSION_PREFIX), "{}: {}", op.name, op.path);
        }
    }

    #[test]
    fn lookup_known_operation() {
        let table = RouteTable::standard();
        let op = table.lookup(route::GET_DISTRICTS).unwrap();
        assert_eq!(op.path, "/v2/admin/location/districts");
        assert_eq!(op.method, HttpMethod::Get);
        assert!(!op.requires_auth);
    }

    #[test]
    fn lookup_unknown_operation_fails() {
        let err = RouteTable::standard().lookup("book_slot").unwrap_err();
        assert!(matches!(err, ApiError::UnknownOperation(ref name) if name == "book_slot"));
    }

    #[test]
    fn only_certificate_download_requires_auth() {
        let protected: Vec<_> = RouteTable::standard()
            .iter()
            .filter(|op| op.requires_auth)
            .map(|op| op.name)
            .collect();
        assert_eq!(protected, vec![route::DOWNLOAD_CERT]);
    }

    #[test]
    fn otp_operations_are_posts() {
        let table = RouteTable::standard();
        assert_eq!(table.lookup(route::REQUEST_OTP).unwrap().method, HttpMethod::Post);
        assert_eq!(table.lookup(route::CONFIRM_OTP).unwrap().method, HttpMethod::Post);
    }
}
