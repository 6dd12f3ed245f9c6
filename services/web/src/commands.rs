use std::path::PathBuf;

use arc_site::config::AppConfig;
use arc_site::enquiry::{EnquiryRecord, FormVariant, SubmitError};
use arc_site::error::AppError;
use arc_site::relay::build_transport;
use arc_site::site::{render_landing_page, LandingView, SiteContent};
use arc_site::telemetry;
use chrono::{Datelike, Local};
use clap::Args;
use tracing::info;

use crate::infra::enquiry_state;

#[derive(Args, Debug)]
pub(crate) struct EnquireArgs {
    /// Visitor's full name
    #[arg(long)]
    pub(crate) name: String,
    /// Contact email address
    #[arg(long)]
    pub(crate) email: String,
    /// Contact phone number (required by the modal form)
    #[arg(long)]
    pub(crate) phone: Option<String>,
    /// Free-text message
    #[arg(long)]
    pub(crate) message: Option<String>,
    /// Enquiry subject (page form): general, viewing, pricing, amenities, other
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Which form rules to apply: modal or page
    #[arg(long, default_value = "modal")]
    pub(crate) variant: FormVariant,
}

impl EnquireArgs {
    fn into_record(self) -> (FormVariant, EnquiryRecord) {
        let record = EnquiryRecord {
            name: self.name,
            email: self.email,
            phone: self.phone.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        };
        (self.variant, record)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportArgs {
    /// Destination file; the page is printed to stdout when omitted
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) async fn run_enquire(args: EnquireArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let transport = build_transport(&config.relay)?;
    let state = enquiry_state(transport, &config.site);

    let (variant, record) = args.into_record();
    let mut controller = state
        .controller(variant)
        .on_close(|| println!("Enquiry form closed."));
    controller.fill(record);

    match controller.submit().await {
        Ok(receipt) => {
            println!("Thank you for your inquiry! We'll get back to you soon.");
            info!(
                close_after_ms = u64::try_from(receipt.close_after.as_millis()).unwrap_or(u64::MAX),
                "waiting before closing the enquiry form"
            );
            controller.wait_and_close().await;
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            println!("Enquiry not submitted:");
            for (field, message) in &errors {
                println!("- {field}: {message}");
            }
            Err(AppError::Enquiry(SubmitError::Invalid(errors)))
        }
        Err(err) => {
            println!("{err}");
            Err(AppError::Enquiry(err))
        }
    }
}

pub(crate) async fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let content = SiteContent::sree_dhanya_arc();
    let view = LandingView {
        year: Local::now().year(),
        modal: None,
    };
    let html = render_landing_page(&content, &view)?;

    match args.out {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            println!("Landing page written to {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
