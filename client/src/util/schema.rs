//! JSON-LD structured data for search engines.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::Serialize;

use crate::content::{Person, SocialLink};

#[derive(Debug, Serialize)]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: String,
    image: &'a str,
    url: &'a str,
    #[serde(rename = "knowsLanguage", skip_serializing_if = "is_empty")]
    knows_language: &'a [&'a str],
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
}

/// Schema.org `Person` for the site owner, serialized for a
/// `<script type="application/ld+json">` tag. `url` is the canonical page.
#[must_use]
pub fn person_json_ld(person: &Person, social: &[SocialLink], url: &str) -> String {
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: person.name,
        job_title: person.role,
        email: format!("mailto:{}", person.email),
        image: person.avatar,
        url,
        knows_language: person.languages,
        same_as: social
            .iter()
            .map(|link| link.link)
            .filter(|link| link.starts_with("https://"))
            .collect(),
    };
    serde_json::to_string(&schema).unwrap_or_else(|err| {
        log::warn!("person schema serialization failed: {err}");
        "{}".to_owned()
    })
}

fn is_empty(list: &&[&str]) -> bool {
    list.is_empty()
}
