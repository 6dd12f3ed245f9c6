/// One photograph shown in a gallery carousel or the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub title: String,
    pub caption: String,
}

impl GalleryImage {
    pub fn new(src: &str, title: &str, caption: &str) -> Self {
        Self {
            src: src.to_string(),
            title: title.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// How many slides a carousel shows at full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselLayout {
    /// A lone image is shown large instead of in a slider.
    Single,
    Slides(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySection {
    pub slug: String,
    pub title: String,
    pub images: Vec<GalleryImage>,
}

impl GallerySection {
    pub fn layout(&self) -> CarouselLayout {
        match self.images.len() {
            0 | 1 => CarouselLayout::Single,
            2 => CarouselLayout::Slides(2),
            _ => CarouselLayout::Slides(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub summary: String,
    pub highlights: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub map_label: String,
    pub image: GalleryImage,
}

impl Location {
    pub fn google_maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={:.6},{:.6}",
            self.latitude, self.longitude
        )
    }

    pub fn apple_maps_url(&self) -> String {
        format!(
            "http://maps.apple.com/?ll={:.6},{:.6}&q={}",
            self.latitude,
            self.longitude,
            self.map_label.split_whitespace().collect::<Vec<_>>().join("+")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub map_embed_url: String,
}

/// Everything the landing page and the enquiry page display.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub name: String,
    pub developer: String,
    pub document_title: String,
    pub tagline: String,
    pub logo: GalleryImage,
    pub hero: GalleryImage,
    pub gallery: Vec<GallerySection>,
    pub floor_plan: GalleryImage,
    pub features: Vec<Feature>,
    pub location: Location,
    pub cta_heading: String,
    pub cta_body: String,
    pub copyright_holder: String,
    pub contact: ContactDetails,
    pub enquiry_heading: String,
    pub enquiry_intro: String,
}

/// Resolved lightbox target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxItem<'a> {
    pub section_slug: &'a str,
    pub section_title: &'a str,
    pub index: usize,
    pub image: &'a GalleryImage,
}

pub const FLOOR_PLAN_SLUG: &str = "floor-plan";
pub const LOCATION_SLUG: &str = "location";

impl SiteContent {
    /// Look up an image by section slug and position. The floor plan and the
    /// location map behave as single-image sections.
    pub fn lightbox(&self, section: &str, index: usize) -> Option<LightboxItem<'_>> {
        let (slug, title, images): (&str, &str, &[GalleryImage]) = match section {
            FLOOR_PLAN_SLUG => (
                FLOOR_PLAN_SLUG,
                "Explore the Floor Plan",
                std::slice::from_ref(&self.floor_plan),
            ),
            LOCATION_SLUG => (
                LOCATION_SLUG,
                "Prime Location",
                std::slice::from_ref(&self.location.image),
            ),
            other => {
                let found = self.gallery.iter().find(|s| s.slug == other)?;
                (found.slug.as_str(), found.title.as_str(), found.images.as_slice())
            }
        };

        images.get(index).map(|image| LightboxItem {
            section_slug: slug,
            section_title: title,
            index,
            image,
        })
    }

    pub fn sree_dhanya_arc() -> Self {
        Self {
            name: "Sree Dhanya ARC".to_string(),
            developer: "Jai&Sons".to_string(),
            document_title: "Sree Dhanya ARC – Premium Residence by Jai&Sons".to_string(),
            tagline: "Luxury Living in the Heart of the City".to_string(),
            logo: GalleryImage::new("/images/logo.png", "Jai&Sons Logo", ""),
            hero: GalleryImage::new("/images/arc-main.png", "Sree Dhanya ARC Building", ""),
            gallery: vec![
                GallerySection {
                    slug: "exterior".to_string(),
                    title: "Exterior Views".to_string(),
                    images: vec![
                        GalleryImage::new(
                            "/images/side.png",
                            "Side View",
                            "Contemporary architectural design with premium finishes",
                        ),
                        GalleryImage::new(
                            "/images/night.png",
                            "Night View",
                            "Stunning illuminated facade in the evening",
                        ),
                        GalleryImage::new(
                            "/images/arc-main.png",
                            "Main Entrance",
                            "Grand entrance and driveway",
                        ),
                        GalleryImage::new(
                            "/images/roof.png",
                            "Rooftop View",
                            "Panoramic views from the rooftop",
                        ),
                        GalleryImage::new(
                            "/images/balcony.png",
                            "Balcony View",
                            "Elegant balconies with panoramic city views",
                        ),
                    ],
                },
                GallerySection {
                    slug: "lobby".to_string(),
                    title: "Lobby & Common Areas".to_string(),
                    images: vec![
                        GalleryImage::new(
                            "/images/reception.png",
                            "Reception",
                            "24/7 staffed reception with concierge services",
                        ),
                        GalleryImage::new(
                            "/images/lobby.png",
                            "Main Lobby",
                            "Grand entrance lobby with luxury finishes",
                        ),
                    ],
                },
                GallerySection {
                    slug: "interiors".to_string(),
                    title: "Apartment Spaces".to_string(),
                    images: vec![
                        GalleryImage::new(
                            "/images/living-room.png",
                            "Living Room",
                            "Spacious living areas with premium flooring",
                        ),
                        GalleryImage::new(
                            "/images/kitchen.png",
                            "Kitchen",
                            "Modern kitchen with high-end appliances",
                        ),
                        GalleryImage::new(
                            "/images/master.png",
                            "Master Bedroom",
                            "Luxurious master suite",
                        ),
                        GalleryImage::new(
                            "/images/closet.png",
                            "Walk-in Closet",
                            "Custom-designed walk-in closets",
                        ),
                        GalleryImage::new(
                            "/images/dining.png",
                            "Dining Area",
                            "Elegant dining space for family gatherings",
                        ),
                        GalleryImage::new(
                            "/images/balcony.png",
                            "Private Balcony",
                            "Spacious private balcony for outdoor living",
                        ),
                        GalleryImage::new(
                            "/images/balcony-surface.png",
                            "Balcony Detail",
                            "Premium balcony finishes and details",
                        ),
                    ],
                },
                GallerySection {
                    slug: "amenities".to_string(),
                    title: "Amenities & Lifestyle".to_string(),
                    images: vec![
                        GalleryImage::new(
                            "/images/pool.png",
                            "Infinity Pool",
                            "Luxurious infinity pool with city views",
                        ),
                        GalleryImage::new(
                            "/images/bar.png",
                            "Sky Lounge",
                            "Exclusive sky lounge with panoramic views",
                        ),
                        GalleryImage::new(
                            "/images/gym.png",
                            "Fitness Center",
                            "State-of-the-art fitness center",
                        ),
                        GalleryImage::new(
                            "/images/game.png",
                            "Game Room",
                            "Entertainment and game room",
                        ),
                        GalleryImage::new(
                            "/images/playground.png",
                            "Kids Playground",
                            "Safe and engaging children's play area",
                        ),
                        GalleryImage::new(
                            "/images/theater.png",
                            "Private Theater",
                            "Private cinema with premium seating",
                        ),
                    ],
                },
            ],
            floor_plan: GalleryImage::new(
                "/images/plan.png",
                "Detailed Floor Plan",
                "Thoughtfully designed floor plans optimized for modern living",
            ),
            features: [
                ("🏠", "3 BHK Premium Units", "Spacious living with premium finishes"),
                ("🏊", "Rooftop Infinity Pool", "Luxurious swimming with city views"),
                ("🎮", "Game Room & Lounge", "Perfect space for entertainment"),
                ("🎬", "Private Mini Theater", "State-of-the-art home cinema"),
                ("💪", "Fully-Equipped Gym", "Modern fitness facilities"),
                ("🎯", "Children's Play Area", "Safe space for kids to play"),
                ("🍸", "Sky Lounge & Bar", "Elegant socializing space"),
                ("🌆", "4 Spacious Balconies", "Enjoy panoramic city views"),
                ("📏", "1220 Sqft Carpet Area", "Generous living space"),
            ]
            .into_iter()
            .map(|(icon, title, description)| Feature {
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
            location: Location {
                summary: "Strategically located near Sankar Road and Raja Kesavadas N.S.S. School, Sree Dhanya ARC offers the perfect blend of convenience and connectivity.".to_string(),
                highlights: vec![
                    "10 min to Lulu Mall".to_string(),
                    "3 min to Metro Station".to_string(),
                    "Surrounded by top schools and hospitals".to_string(),
                ],
                latitude: 8.514194,
                longitude: 76.9715,
                map_label: "Sree Dhanya ARC".to_string(),
                image: GalleryImage::new(
                    "/images/location.png",
                    "Strategic Location",
                    "Perfectly situated in the heart of the city with excellent connectivity",
                ),
            },
            cta_heading: "Ready to Own Your Dream Home?".to_string(),
            cta_body: "Secure your premium residence at Sree Dhanya ARC today. Limited units available.".to_string(),
            copyright_holder: "Jai&Sons Real Estate Group".to_string(),
            contact: ContactDetails {
                email: "info@jaiandsons.com".to_string(),
                phone: "+91 123 456 7890".to_string(),
                address: "Sankar Road, Near Raja Kesavadas N.S.S. School, Kochi, Kerala".to_string(),
                map_embed_url: "https://www.google.com/maps?q=8.514194,76.971500&output=embed".to_string(),
            },
            enquiry_heading: "Let's Start Your Luxury Living Journey".to_string(),
            enquiry_intro: "Experience the epitome of luxury living at Sree Dhanya ARC. Our team is ready to guide you through every step of your journey to finding your dream home.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_links_use_six_decimal_coordinates() {
        let content = SiteContent::sree_dhanya_arc();
        assert_eq!(
            content.location.google_maps_url(),
            "https://www.google.com/maps?q=8.514194,76.971500"
        );
        assert_eq!(
            content.location.apple_maps_url(),
            "http://maps.apple.com/?ll=8.514194,76.971500&q=Sree+Dhanya+ARC"
        );
    }

    #[test]
    fn carousel_layout_depends_on_image_count() {
        let content = SiteContent::sree_dhanya_arc();
        let layouts: Vec<_> = content.gallery.iter().map(GallerySection::layout).collect();
        assert_eq!(
            layouts,
            vec![
                CarouselLayout::Slides(3),
                CarouselLayout::Slides(2),
                CarouselLayout::Slides(3),
                CarouselLayout::Slides(3),
            ]
        );

        let single = GallerySection {
            slug: "solo".to_string(),
            title: "Solo".to_string(),
            images: vec![content.floor_plan.clone()],
        };
        assert_eq!(single.layout(), CarouselLayout::Single);
    }

    #[test]
    fn lightbox_resolves_gallery_and_single_image_sections() {
        let content = SiteContent::sree_dhanya_arc();

        let kitchen = content.lightbox("interiors", 1).expect("kitchen exists");
        assert_eq!(kitchen.image.title, "Kitchen");
        assert_eq!(kitchen.section_title, "Apartment Spaces");

        let plan = content.lightbox(FLOOR_PLAN_SLUG, 0).expect("plan exists");
        assert_eq!(plan.image.src, "/images/plan.png");

        assert!(content.lightbox(FLOOR_PLAN_SLUG, 1).is_none());
        assert!(content.lightbox("lobby", 2).is_none());
        assert!(content.lightbox("penthouse", 0).is_none());
    }
}
