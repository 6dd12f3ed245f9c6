use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use chrono::{Datelike, Local};
use tracing::debug;

use super::content::SiteContent;
use super::forms::FormView;
use super::render::{render_enquiry_page, render_landing_page, render_lightbox_page, LandingView};
use crate::enquiry::router::outcome_status;
use crate::enquiry::{enquiry_router, EnquiryRecord, EnquiryState, FormVariant};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct SiteState {
    pub content: Arc<SiteContent>,
    pub enquiry: EnquiryState,
}

impl SiteState {
    pub fn new(content: SiteContent, enquiry: EnquiryState) -> Self {
        Self {
            content: Arc::new(content),
            enquiry,
        }
    }
}

/// Server-rendered pages plus the JSON enquiry endpoint.
pub fn site_router(state: SiteState) -> Router {
    let api = enquiry_router(state.enquiry.clone());
    Router::new()
        .route("/", get(landing_handler))
        .route("/gallery/:section/:index", get(lightbox_handler))
        .route("/enquiry", axum::routing::post(modal_submit_handler))
        .route(
            "/enquire",
            get(enquiry_page_handler).post(page_submit_handler),
        )
        .with_state(state)
        .merge(api)
}

fn current_year() -> i32 {
    Local::now().year()
}

fn html(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())],
        body,
    )
        .into_response()
}

/// Form posts answer 200 on success; the JSON API uses 202.
fn page_status(status: StatusCode) -> StatusCode {
    if status == StatusCode::ACCEPTED {
        StatusCode::OK
    } else {
        status
    }
}

pub(crate) async fn landing_handler(State(state): State<SiteState>) -> Result<Response, AppError> {
    let view = LandingView {
        year: current_year(),
        modal: None,
    };
    let body = render_landing_page(&state.content, &view)?;
    Ok(html(StatusCode::OK, body))
}

pub(crate) async fn lightbox_handler(
    State(state): State<SiteState>,
    Path((section, index)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let item = index
        .parse::<usize>()
        .ok()
        .and_then(|index| state.content.lightbox(&section, index));

    let Some(item) = item else {
        debug!(%section, %index, "lightbox target not found");
        return Ok((StatusCode::NOT_FOUND, "image not found").into_response());
    };

    let body = render_lightbox_page(&state.content, &item)?;
    Ok(html(StatusCode::OK, body))
}

pub(crate) async fn modal_submit_handler(
    State(state): State<SiteState>,
    Form(input): Form<EnquiryRecord>,
) -> Result<Response, AppError> {
    let (controller, outcome) = state.enquiry.submit(FormVariant::Modal, input).await;
    let form = FormView::from_outcome(&controller, &outcome);
    let view = LandingView {
        year: current_year(),
        modal: Some(&form),
    };
    let body = render_landing_page(&state.content, &view)?;
    Ok(html(page_status(outcome_status(&outcome)), body))
}

pub(crate) async fn enquiry_page_handler(
    State(state): State<SiteState>,
) -> Result<Response, AppError> {
    let form = FormView::blank(FormVariant::Page);
    let body = render_enquiry_page(&state.content, &form, current_year())?;
    Ok(html(StatusCode::OK, body))
}

pub(crate) async fn page_submit_handler(
    State(state): State<SiteState>,
    Form(input): Form<EnquiryRecord>,
) -> Result<Response, AppError> {
    let (controller, outcome) = state.enquiry.submit(FormVariant::Page, input).await;
    let form = FormView::from_outcome(&controller, &outcome);
    let body = render_enquiry_page(&state.content, &form, current_year())?;
    Ok(html(page_status(outcome_status(&outcome)), body))
}
