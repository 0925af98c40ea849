use super::*;

#[test]
fn classify_toggles_exactly_at_breakpoint() {
    assert_eq!(ViewportClass::classify(767.0), ViewportClass::Small);
    assert_eq!(ViewportClass::classify(767.99), ViewportClass::Small);
    assert_eq!(ViewportClass::classify(768.0), ViewportClass::Large);
    assert_eq!(ViewportClass::classify(1024.0), ViewportClass::Large);
}

#[test]
fn classify_degenerate_widths_as_small() {
    assert_eq!(ViewportClass::classify(0.0), ViewportClass::Small);
    assert_eq!(ViewportClass::classify(-10.0), ViewportClass::Small);
    assert_eq!(ViewportClass::classify(f64::NAN), ViewportClass::Small);
}

#[test]
fn default_class_is_large() {
    assert_eq!(ViewportClass::default(), ViewportClass::Large);
    assert!(ViewportClass::default().is_large());
    assert_eq!(ViewportClassifier::default().class(), ViewportClass::Large);
}

#[test]
fn observe_reports_only_changes() {
    let mut classifier = ViewportClassifier::default();
    assert_eq!(classifier.observe(1200.0), None);
    assert_eq!(classifier.observe(900.0), None);
    assert_eq!(classifier.observe(767.0), Some(ViewportClass::Small));
    assert_eq!(classifier.observe(500.0), None);
    assert_eq!(classifier.observe(768.0), Some(ViewportClass::Large));
    assert_eq!(classifier.class(), ViewportClass::Large);
}

#[test]
fn class_labels() {
    assert_eq!(ViewportClass::Large.as_str(), "large");
    assert_eq!(ViewportClass::Small.as_str(), "small");
}
