//! Application state for the Holiday Query Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::service::HolidayService;

/// Shared application state.
///
/// Holds the query service and the clock that decides what "today" is for
/// each request.
#[derive(Clone)]
pub struct AppState {
    /// The query service.
    service: Arc<HolidayService>,
    /// Source of today's date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state with an explicit clock.
    pub fn new(service: HolidayService, clock: Arc<dyn Clock>) -> Self {
        Self {
            service: Arc::new(service),
            clock,
        }
    }

    /// Creates a new application state reading the local system clock.
    pub fn with_system_clock(service: HolidayService) -> Self {
        Self::new(service, Arc::new(SystemClock))
    }

    /// Returns the query service.
    pub fn service(&self) -> &HolidayService {
        &self.service
    }

    /// Returns today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
