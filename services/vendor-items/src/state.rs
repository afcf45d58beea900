//! 共享应用状态

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::api::csrf::CsrfTokens;
use crate::application::ServiceHandler;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ServiceHandler>,
    pub csrf: CsrfTokens,
    pub metrics: PrometheusHandle,
}
