use super::*;
use crate::content::{Intro, Section};

#[test]
fn toc_lists_every_displayed_section_in_page_order() {
    let ids = toc_entries(&ABOUT).iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids, ["intro", "work", "studies", "technical"]);
}

#[test]
fn toc_uses_section_titles() {
    let entries = toc_entries(&ABOUT);
    assert_eq!(entries[1].title, ABOUT.work.title);
}

#[test]
fn toc_skips_hidden_sections() {
    let about = About {
        intro: Intro { display: false, ..ABOUT.intro },
        studies: Section { display: false, ..ABOUT.studies },
        ..ABOUT
    };
    let ids = toc_entries(&about).iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids, ["work", "technical"]);
}
