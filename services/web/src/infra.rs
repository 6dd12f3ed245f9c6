use arc_site::config::SiteConfig;
use arc_site::enquiry::EnquiryState;
use arc_site::relay::SubmissionTransport;
use arc_site::site::{SiteContent, SiteState};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) assets: Arc<PathBuf>,
}

pub(crate) fn enquiry_state(
    transport: Arc<dyn SubmissionTransport>,
    site: &SiteConfig,
) -> EnquiryState {
    EnquiryState::new(transport, site.enquiry_settings())
}

pub(crate) fn site_state(transport: Arc<dyn SubmissionTransport>, site: &SiteConfig) -> SiteState {
    let content = SiteContent::sree_dhanya_arc();
    SiteState::new(content, enquiry_state(transport, site))
}
