//! Gallery Tests
//!
//! Rotation semantics only — browser launching is not exercised in tests.

use crate::gallery::ImageGallery;

#[test]
fn test_five_urls_per_category() {
    let mut gallery = ImageGallery::new();

    for category in ["flowers", "scifi", "scenery", "animals", "cute"] {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5 {
            seen.insert(gallery.next_url(category).unwrap());
        }
        assert_eq!(seen.len(), 5, "category '{}' should have 5 distinct URLs", category);
    }
}

#[test]
fn test_rotation_is_cyclic() {
    let mut gallery = ImageGallery::new();

    let first = gallery.next_url("cute").unwrap();
    for _ in 0..4 {
        gallery.next_url("cute").unwrap();
    }
    assert_eq!(gallery.next_url("cute").unwrap(), first);
}

#[test]
fn test_unknown_category_is_graceful() {
    let mut gallery = ImageGallery::new();

    assert!(gallery.next_url("dinosaurs").is_none());
    assert!(gallery.open_next("dinosaurs").is_err());
}
