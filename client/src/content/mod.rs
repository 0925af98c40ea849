//! Static site content: who the site is about and what it shows.
//!
//! DESIGN
//! ======
//! Everything here is `&'static` data compiled into the binary. Pages and
//! components borrow from it directly; nothing mutates it at runtime. The
//! concrete values live in [`site`]; this module only defines their shapes and
//! a few lookups.

pub mod site;

use time::Date;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub use site::{ABOUT, BASE_URL, BLOG, BLOG_POSTS, GALLERY, HOME, NEWSLETTER, PERSON, SOCIAL, VISUAL_ITEMS, WORK};

/// One entry in the image-reveal project list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualItem {
    /// Unique and stable; also the list order.
    pub key: u32,
    /// Static screenshot used as a placeholder behind the live preview.
    pub preview_image_url: &'static str,
    /// The live site the item links to and embeds.
    pub target_url: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub email: &'static str,
    /// IANA time zone identifier, e.g. `Europe/Vienna`.
    pub location: &'static str,
    pub languages: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    /// Essential links are also shown on the about page.
    pub essential: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Newsletter {
    pub display: bool,
    pub title: &'static str,
    pub description: &'static str,
}

/// Route-level metadata shared by every page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub path: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Featured {
    pub title: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Home {
    pub meta: PageMeta,
    /// Social-card image (`og:image`), site-relative.
    pub image: &'static str,
    pub headline: &'static str,
    pub featured: Option<Featured>,
    pub subline: &'static str,
}

/// An image with its aspect ratio expressed as `width:height` units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub timeframe: &'static str,
    pub role: &'static str,
    pub achievements: &'static [&'static str],
    pub images: &'static [ImageRef],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Institution {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [Tag],
    pub images: &'static [ImageRef],
}

/// A titled about-page section that can be switched off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section<T: 'static> {
    pub display: bool,
    pub title: &'static str,
    pub entries: &'static [T],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intro {
    pub display: bool,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct About {
    pub meta: PageMeta,
    pub table_of_contents: bool,
    pub show_avatar: bool,
    /// Booking link; `None` hides the calendar call-to-action.
    pub calendar: Option<&'static str>,
    pub intro: Intro,
    pub work: Section<Experience>,
    pub studies: Section<Institution>,
    pub technical: Section<Skill>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub orientation: Orientation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gallery {
    pub meta: PageMeta,
    pub images: &'static [GalleryImage],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    /// URL segment under `/blog/`.
    pub slug: &'static str,
    pub title: &'static str,
    pub published: Date,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub body_markdown: &'static str,
}

/// Look up a blog post by slug.
#[must_use]
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

/// Blog posts ordered newest first; ties keep declaration order.
#[must_use]
pub fn posts_newest_first() -> Vec<&'static BlogPost> {
    let mut posts = BLOG_POSTS.iter().collect::<Vec<_>>();
    posts.sort_by(|a, b| b.published.cmp(&a.published));
    posts
}

/// Social links flagged as essential, in declaration order.
#[must_use]
pub fn essential_social() -> Vec<&'static SocialLink> {
    SOCIAL.iter().filter(|link| link.essential).collect()
}

/// Pages listed in the header navigation, in display order.
#[must_use]
pub fn nav_pages() -> [&'static PageMeta; 5] {
    [&HOME.meta, &ABOUT.meta, &WORK, &BLOG, &GALLERY.meta]
}
