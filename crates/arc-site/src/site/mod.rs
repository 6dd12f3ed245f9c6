//! Landing page content, HTML rendering and the page routes.

pub mod content;
mod forms;
mod html;
pub mod render;
pub mod router;

pub use content::{
    CarouselLayout, ContactDetails, Feature, GalleryImage, GallerySection, LightboxItem, Location,
    SiteContent,
};
pub use forms::FormView;
pub use render::{render_enquiry_page, render_landing_page, render_lightbox_page, LandingView};
pub use router::{site_router, SiteState};
