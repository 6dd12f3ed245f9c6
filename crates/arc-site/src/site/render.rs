use std::fmt::{self, Write as _};

use super::content::{
    CarouselLayout, GalleryImage, LightboxItem, SiteContent, FLOOR_PLAN_SLUG, LOCATION_SLUG,
};
use super::forms::{write_modal_form, write_page_form, FormView};
use super::html::{escape_html, write_document};
use crate::enquiry::FormVariant;

/// Per-request inputs for the landing page.
#[derive(Debug, Clone)]
pub struct LandingView<'a> {
    pub year: i32,
    /// Modal state after a post; `None` renders a closed, empty modal.
    pub modal: Option<&'a FormView>,
}

pub fn render_landing_page(
    content: &SiteContent,
    view: &LandingView<'_>,
) -> Result<String, fmt::Error> {
    let blank = FormView::blank(FormVariant::Modal);
    let modal = view.modal.unwrap_or(&blank);
    let refresh = view.modal.and_then(FormView::refresh);

    write_document(&content.document_title, refresh, |html| {
        write_nav(html, content)?;
        write_hero(html, content)?;
        write_gallery(html, content)?;
        write_features(html, content)?;
        write_location(html, content)?;
        write_cta(html, content)?;
        write_footer(html, content, view.year)?;
        write_modal_form(html, modal, view.modal.is_some())
    })
}

pub fn render_lightbox_page(
    content: &SiteContent,
    item: &LightboxItem<'_>,
) -> Result<String, fmt::Error> {
    let title = format!("{} – {}", item.image.title, content.name);
    write_document(&title, None, |html| {
        let back = format!("/#{}", item.section_slug);
        writeln!(
            html,
            "<div class=\"lightbox\" role=\"dialog\" aria-label=\"{}\">",
            escape_html(item.section_title)
        )?;
        writeln!(
            html,
            "<a class=\"close\" href=\"{}\" aria-label=\"Close lightbox\">&times;</a>",
            escape_html(&back)
        )?;
        writeln!(
            html,
            "<figure><img src=\"{}\" alt=\"{}\">",
            escape_html(&item.image.src),
            escape_html(&item.image.title)
        )?;
        writeln!(
            html,
            "<figcaption><p>{}</p>",
            escape_html(&item.image.title)
        )?;
        if !item.image.caption.is_empty() {
            writeln!(html, "<p>{}</p>", escape_html(&item.image.caption))?;
        }
        html.push_str("</figcaption></figure>\n</div>\n");
        Ok(())
    })
}

pub fn render_enquiry_page(
    content: &SiteContent,
    form: &FormView,
    year: i32,
) -> Result<String, fmt::Error> {
    let title = format!("Enquire – {}", content.name);
    write_document(&title, form.refresh(), |html| {
        write_nav(html, content)?;
        html.push_str("<section class=\"enquiry\">\n");
        writeln!(html, "<h1>{}</h1>", escape_html(&content.enquiry_heading))?;
        writeln!(html, "<p>{}</p>", escape_html(&content.enquiry_intro))?;
        write_page_form(html, form)?;

        let contact = &content.contact;
        html.push_str("<div class=\"contact\">\n<h2>Contact Information</h2>\n");
        writeln!(
            html,
            "<h3>Email</h3><p><a href=\"mailto:{0}\">{0}</a></p>",
            escape_html(&contact.email)
        )?;
        writeln!(html, "<h3>Phone</h3><p>{}</p>", escape_html(&contact.phone))?;
        writeln!(
            html,
            "<h3>Location</h3><p>{}</p>",
            escape_html(&contact.address)
        )?;
        writeln!(
            html,
            "<h2>Find Us</h2><iframe title=\"Map\" src=\"{}\" width=\"100%\" height=\"320\" style=\"border:0\" loading=\"lazy\" referrerpolicy=\"no-referrer-when-downgrade\"></iframe>",
            escape_html(&contact.map_embed_url)
        )?;
        html.push_str("</div>\n</section>\n");
        write_footer(html, content, year)
    })
}

fn write_nav(html: &mut String, content: &SiteContent) -> fmt::Result {
    writeln!(
        html,
        "<nav><a href=\"/\" aria-label=\"Go to top\"><img src=\"{}\" alt=\"{}\"></a>",
        escape_html(&content.logo.src),
        escape_html(&content.logo.title)
    )?;
    html.push_str("<div><a href=\"/#gallery\">Gallery</a><a href=\"/#location\">Location</a>");
    html.push_str("<a class=\"button\" href=\"/#enquire\">Enquire Now</a></div></nav>\n");
    Ok(())
}

fn write_hero(html: &mut String, content: &SiteContent) -> fmt::Result {
    html.push_str("<header class=\"hero\">\n");
    writeln!(
        html,
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(&content.hero.src),
        escape_html(&content.hero.title)
    )?;
    writeln!(html, "<div><h1>{}</h1>", escape_html(&content.name))?;
    writeln!(html, "<p>{}</p>", escape_html(&content.tagline))?;
    html.push_str("<a class=\"button\" href=\"#gallery\">View Arc Homes</a></div>\n</header>\n");
    Ok(())
}

fn write_figure(
    html: &mut String,
    section_slug: &str,
    index: usize,
    image: &GalleryImage,
) -> fmt::Result {
    writeln!(
        html,
        "<figure><a href=\"/gallery/{}/{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a><figcaption>{}</figcaption></figure>",
        escape_html(section_slug),
        index,
        escape_html(&image.src),
        escape_html(&image.title),
        escape_html(&image.caption)
    )
}

fn write_gallery(html: &mut String, content: &SiteContent) -> fmt::Result {
    html.push_str("<section id=\"gallery\">\n<h2>Gallery</h2>\n");
    for section in &content.gallery {
        let class = match section.layout() {
            CarouselLayout::Single => "carousel single".to_string(),
            CarouselLayout::Slides(count) => format!("carousel slides-{count}"),
        };
        writeln!(
            html,
            "<div id=\"{}\"><h3>{}</h3><div class=\"{class}\">",
            escape_html(&section.slug),
            escape_html(&section.title)
        )?;
        for (index, image) in section.images.iter().enumerate() {
            write_figure(html, &section.slug, index, image)?;
        }
        html.push_str("</div></div>\n");
    }

    writeln!(
        html,
        "<div id=\"{FLOOR_PLAN_SLUG}\" class=\"plan\"><h3>Explore the Floor Plan</h3>"
    )?;
    write_figure(html, FLOOR_PLAN_SLUG, 0, &content.floor_plan)?;
    html.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_features(html: &mut String, content: &SiteContent) -> fmt::Result {
    writeln!(
        html,
        "<section id=\"why\">\n<h2>Why Choose {}</h2>\n<div class=\"features\">",
        escape_html(&content.name)
    )?;
    for feature in &content.features {
        writeln!(
            html,
            "<div class=\"feature\"><div aria-hidden=\"true\">{}</div><h3>{}</h3><p>{}</p></div>",
            escape_html(&feature.icon),
            escape_html(&feature.title),
            escape_html(&feature.description)
        )?;
    }
    html.push_str("</div>\n</section>\n");
    Ok(())
}

fn write_location(html: &mut String, content: &SiteContent) -> fmt::Result {
    let location = &content.location;
    writeln!(
        html,
        "<section id=\"{LOCATION_SLUG}\" class=\"location\">\n<h2>Prime Location</h2>"
    )?;
    write_figure(html, LOCATION_SLUG, 0, &location.image)?;
    writeln!(html, "<p>{}</p>\n<ul>", escape_html(&location.summary))?;
    for highlight in &location.highlights {
        writeln!(html, "<li>{}</li>", escape_html(highlight))?;
    }
    html.push_str("</ul>\n");
    writeln!(
        html,
        "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Open in Google Maps</a>",
        escape_html(&location.google_maps_url())
    )?;
    writeln!(
        html,
        "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Open in Apple Maps</a>",
        escape_html(&location.apple_maps_url())
    )?;
    html.push_str("</section>\n");
    Ok(())
}

fn write_cta(html: &mut String, content: &SiteContent) -> fmt::Result {
    writeln!(
        html,
        "<section class=\"cta\"><h2>{}</h2><p>{}</p><a class=\"button\" href=\"#enquire\">Enquire Now</a></section>",
        escape_html(&content.cta_heading),
        escape_html(&content.cta_body)
    )
}

fn write_footer(html: &mut String, content: &SiteContent, year: i32) -> fmt::Result {
    writeln!(
        html,
        "<footer><p>&copy; {year} {}. All rights reserved.</p></footer>",
        escape_html(&content.copyright_holder)
    )
}
