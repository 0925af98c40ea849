use std::collections::HashSet;

use super::*;

// =============================================================
// Visual items
// =============================================================

#[test]
fn visual_item_keys_are_unique() {
    let keys = VISUAL_ITEMS.iter().map(|item| item.key).collect::<HashSet<_>>();
    assert_eq!(keys.len(), VISUAL_ITEMS.len());
}

#[test]
fn visual_item_keys_are_in_ascending_order() {
    assert!(VISUAL_ITEMS.windows(2).all(|pair| pair[0].key < pair[1].key));
}

#[test]
fn visual_item_targets_are_https() {
    for item in VISUAL_ITEMS {
        assert!(item.target_url.starts_with("https://"), "{} is not https", item.target_url);
    }
}

#[test]
fn visual_item_previews_screenshot_their_target() {
    for item in VISUAL_ITEMS {
        assert!(
            item.preview_image_url.ends_with(item.target_url),
            "{} does not capture {}",
            item.preview_image_url,
            item.target_url
        );
    }
}

// =============================================================
// Person & social
// =============================================================

#[test]
fn person_name_joins_first_and_last() {
    assert_eq!(PERSON.name, format!("{} {}", PERSON.first_name, PERSON.last_name));
}

#[test]
fn email_social_link_uses_person_email() {
    let email = SOCIAL.iter().find(|link| link.icon == "email").expect("email link");
    assert_eq!(email.link, format!("mailto:{}", PERSON.email));
}

#[test]
fn essential_social_preserves_order() {
    let names = essential_social().iter().map(|link| link.name).collect::<Vec<_>>();
    assert_eq!(names.first(), Some(&"GitHub"));
    assert_eq!(names.last(), Some(&"Email"));
}

// =============================================================
// Pages
// =============================================================

#[test]
fn nav_pages_have_unique_absolute_paths() {
    let pages = nav_pages();
    let paths = pages.iter().map(|page| page.path).collect::<HashSet<_>>();
    assert_eq!(paths.len(), pages.len());
    assert!(pages.iter().all(|page| page.path.starts_with('/')));
    assert_eq!(pages[0].path, "/");
}

#[test]
fn featured_link_points_at_a_known_page() {
    let featured = HOME.featured.expect("home has a featured link");
    assert!(nav_pages().iter().any(|page| page.path == featured.href));
}

// =============================================================
// Blog
// =============================================================

#[test]
fn blog_slugs_are_unique_and_url_safe() {
    let slugs = BLOG_POSTS.iter().map(|post| post.slug).collect::<HashSet<_>>();
    assert_eq!(slugs.len(), BLOG_POSTS.len());
    for slug in slugs {
        assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{slug} is not url safe"
        );
    }
}

#[test]
fn blog_posts_have_past_dates_and_bodies() {
    for post in BLOG_POSTS {
        assert!(post.published.year() >= 2020, "{} has an implausible date", post.slug);
        assert!(!post.body_markdown.trim().is_empty());
    }
}

#[test]
fn posts_newest_first_sorts_by_date_descending() {
    let posts = posts_newest_first();
    assert_eq!(posts.len(), BLOG_POSTS.len());
    assert!(posts.windows(2).all(|pair| pair[0].published >= pair[1].published));
    assert_eq!(posts[0].slug, "hover-previews-without-jank");
}

#[test]
fn find_post_matches_slug_only() {
    let first = &BLOG_POSTS[0];
    assert_eq!(find_post(first.slug).map(|p| p.title), Some(first.title));
    assert!(find_post("no-such-post").is_none());
    assert!(find_post("").is_none());
}

// =============================================================
// Gallery & about
// =============================================================

#[test]
fn gallery_has_both_orientations() {
    assert!(GALLERY.images.iter().any(|img| img.orientation == Orientation::Horizontal));
    assert!(GALLERY.images.iter().any(|img| img.orientation == Orientation::Vertical));
}

#[test]
fn about_images_have_positive_aspect() {
    let experience_images = ABOUT.work.entries.iter().flat_map(|e| e.images.iter());
    let skill_images = ABOUT.technical.entries.iter().flat_map(|s| s.images.iter());
    for image in experience_images.chain(skill_images) {
        assert!(image.width > 0 && image.height > 0, "{} has a degenerate aspect", image.src);
    }
}
