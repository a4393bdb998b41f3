//! # Site Metadata and Assets
//!
//! Static configuration for the page head and the asset paths the page cycles through.
//! The document server renders [`SITE_METADATA`] into `<head>`; the browser page only
//! reads the asset lists.

/// Open Graph fields for link previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    /// Canonical URL. The server may override this with its configured site URL.
    pub url: &'static str,
    pub site_name: &'static str,
    pub locale: &'static str,
    pub kind: &'static str,
    pub images: &'static [&'static str],
}

/// Twitter card fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

/// Everything the layout shell puts into the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMetadata {
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    lang: "en",
    title: "Showfari — Discover Toronto’s Scene",
    description: "Join Showfari’s beta and explore Toronto’s live music community.",
    open_graph: OpenGraph {
        title: "Showfari — Discover Toronto’s Local Scene",
        description: "Join our beta and explore Toronto’s most exciting performances in the city.",
        url: "https://showfari.ca",
        site_name: "Showfari",
        locale: "en_CA",
        kind: "website",
        images: &[],
    },
    twitter: TwitterCard {
        card: "summary",
        title: "Showfari — Discover Toronto’s Local Scene",
        description: "Discover and explore Toronto’s vibrant music community with Showfari.",
        images: &[],
    },
};

/// Banner images, in display order.
pub const BANNER_IMAGES: [&str; 7] = [
    "/banners/1.jpg",
    "/banners/2.jpg",
    "/banners/3.jpg",
    "/banners/4.jpg",
    "/banners/5.jpg",
    "/banners/6.jpg",
    "/banners/7.jpg",
];

pub const SUBWAY_GIF: &str = "/subway.gif";

pub const CONTACT_EMAIL: &str = "showfari.team@gmail.com";
