use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::controller::{EnquiryController, SubmitError, SubmitReceipt};
use super::domain::{EnquiryRecord, EnquirySettings, FormVariant};
use crate::relay::SubmissionTransport;

/// Shared dependencies for building per-request controllers.
#[derive(Debug, Clone)]
pub struct EnquiryState {
    pub transport: Arc<dyn SubmissionTransport>,
    pub settings: EnquirySettings,
}

impl EnquiryState {
    pub fn new(transport: Arc<dyn SubmissionTransport>, settings: EnquirySettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn controller(&self, variant: FormVariant) -> EnquiryController {
        EnquiryController::new(variant, self.settings.clone(), self.transport.clone())
    }

    /// Run one submission end to end: fill a fresh controller and submit it.
    pub async fn submit(
        &self,
        variant: FormVariant,
        input: EnquiryRecord,
    ) -> (EnquiryController, Result<SubmitReceipt, SubmitError>) {
        let mut controller = self.controller(variant);
        controller.fill(input);
        let outcome = controller.submit().await;
        (controller, outcome)
    }
}

/// HTTP status reported for a submission outcome.
pub fn outcome_status(outcome: &Result<SubmitReceipt, SubmitError>) -> StatusCode {
    match outcome {
        Ok(_) => StatusCode::ACCEPTED,
        Err(SubmitError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmitError::Transport { .. }) => StatusCode::BAD_GATEWAY,
        Err(SubmitError::InFlight) => StatusCode::CONFLICT,
    }
}

/// JSON endpoint for script-driven clients.
pub fn enquiry_router(state: EnquiryState) -> Router {
    Router::new()
        .route("/api/v1/enquiries", post(submit_handler))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VariantQuery {
    #[serde(default)]
    pub(crate) variant: FormVariant,
}

pub(crate) async fn submit_handler(
    State(state): State<EnquiryState>,
    Query(query): Query<VariantQuery>,
    Json(input): Json<EnquiryRecord>,
) -> Response {
    let (_, outcome) = state.submit(query.variant, input).await;
    let status = outcome_status(&outcome);

    let payload = match outcome {
        Ok(receipt) => json!({
            "status": "success",
            "close_after_ms": u64::try_from(receipt.close_after.as_millis()).unwrap_or(u64::MAX),
        }),
        Err(SubmitError::Invalid(errors)) => json!({
            "status": "invalid",
            "errors": errors,
        }),
        Err(SubmitError::Transport { banner, .. }) => json!({
            "status": "error",
            "message": banner,
        }),
        Err(other) => json!({
            "status": "error",
            "message": other.to_string(),
        }),
    };

    (status, Json(payload)).into_response()
}
