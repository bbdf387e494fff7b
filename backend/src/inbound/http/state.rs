//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeStatusQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub status: Arc<dyn EmployeeStatusQuery>,
}

impl HttpState {
    /// Construct state from the status query port.
    ///
    /// # Examples
    /// ```ignore
    /// use std::sync::Arc;
    /// use getemps::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(resolver));
    /// ```
    pub fn new(status: Arc<dyn EmployeeStatusQuery>) -> Self {
        Self { status }
    }
}
