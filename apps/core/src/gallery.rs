//! Image gallery: fixed online URL lists per category.
//!
//! Each category rotates through five URLs; opening advances the cursor and
//! launches the default browser. Online only — nothing is downloaded.

use std::collections::HashMap;
use tracing::info;

use crate::error::AppError;

struct Category {
    name: &'static str,
    urls: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        name: "flowers",
        urls: &[
            "https://images.pexels.com/photos/36764/marguerite-daisy-beautiful-beauty.jpg",
            "https://images.pexels.com/photos/712876/pexels-photo-712876.jpeg",
            "https://images.pexels.com/photos/931177/pexels-photo-931177.jpeg",
            "https://images.pexels.com/photos/5418832/pexels-photo-5418832.jpeg",
            "https://images.pexels.com/photos/56866/garden-rose-red-pink-56866.jpeg",
        ],
    },
    Category {
        name: "scifi",
        urls: &[
            "https://images.pexels.com/photos/373543/pexels-photo-373543.jpeg",
            "https://images.pexels.com/photos/2837009/pexels-photo-2837009.jpeg",
            "https://images.pexels.com/photos/3549518/pexels-photo-3549518.jpeg",
            "https://images.pexels.com/photos/847393/pexels-photo-847393.jpeg",
            "https://images.pexels.com/photos/3888151/pexels-photo-3888151.jpeg",
        ],
    },
    Category {
        name: "scenery",
        urls: &[
            "https://images.pexels.com/photos/417173/pexels-photo-417173.jpeg",
            "https://images.pexels.com/photos/462162/pexels-photo-462162.jpeg",
            "https://images.pexels.com/photos/414171/pexels-photo-414171.jpeg",
            "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg",
            "https://images.pexels.com/photos/3408744/pexels-photo-3408744.jpeg",
        ],
    },
    Category {
        name: "animals",
        urls: &[
            "https://images.pexels.com/photos/1108099/pexels-photo-1108099.jpeg",
            "https://images.pexels.com/photos/333083/pexels-photo-333083.jpeg",
            "https://images.pexels.com/photos/145939/pexels-photo-145939.jpeg",
            "https://images.pexels.com/photos/1334591/pexels-photo-1334591.jpeg",
            "https://images.pexels.com/photos/46024/pexels-photo-46024.jpeg",
        ],
    },
    Category {
        name: "cute",
        urls: &[
            "https://images.pexels.com/photos/45170/kittens-cat-cat-puppy-rush-45170.jpeg",
            "https://images.pexels.com/photos/751602/pexels-photo-751602.jpeg",
            "https://images.pexels.com/photos/20787/pexels-photo.jpg",
            "https://images.pexels.com/photos/181406/pexels-photo-181406.jpeg",
            "https://images.pexels.com/photos/302280/pexels-photo-302280.jpeg",
        ],
    },
];

/// Rotating image gallery over the fixed category lists.
#[derive(Default)]
pub struct ImageGallery {
    cursor: HashMap<&'static str, usize>,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category names in display order.
    pub fn categories(&self) -> Vec<&'static str> {
        CATEGORIES.iter().map(|category| category.name).collect()
    }

    /// Next URL for a category, rotating through its fixed list. Unknown
    /// categories miss gracefully.
    pub fn next_url(&mut self, category: &str) -> Option<&'static str> {
        let needle = category.trim().to_lowercase();
        let category = CATEGORIES.iter().find(|c| c.name == needle)?;

        let index = self.cursor.entry(category.name).or_insert(0);
        let url = category.urls[*index];
        *index = (*index + 1) % category.urls.len();
        Some(url)
    }

    /// Open the next URL for a category in the default browser and report
    /// which URL was opened.
    pub fn open_next(&mut self, category: &str) -> Result<&'static str, AppError> {
        let url = self.next_url(category).ok_or_else(|| {
            AppError::Validation(format!("no images for category '{}'", category))
        })?;
        open::that(url)?;
        info!(category, url, "Opened image in browser");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut gallery = ImageGallery::new();

        let first: Vec<&str> = (0..5).map(|_| gallery.next_url("flowers").unwrap()).collect();
        assert_eq!(first.len(), 5);

        // Sixth pull wraps back to the first URL.
        assert_eq!(gallery.next_url("flowers").unwrap(), first[0]);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut gallery = ImageGallery::new();

        let flower = gallery.next_url("flowers").unwrap();
        let animal = gallery.next_url("animals").unwrap();
        assert_ne!(flower, animal);

        // Pulling from one category does not advance another.
        assert_ne!(gallery.next_url("flowers").unwrap(), flower);
    }

    #[test]
    fn test_unknown_category_misses() {
        let mut gallery = ImageGallery::new();
        assert!(gallery.next_url("spaceships").is_none());
    }

    #[test]
    fn test_category_name_is_case_insensitive() {
        let mut gallery = ImageGallery::new();
        assert!(gallery.next_url("Flowers").is_some());
    }

    #[test]
    fn test_category_list() {
        let gallery = ImageGallery::new();
        assert_eq!(
            gallery.categories(),
            vec!["flowers", "scifi", "scenery", "animals", "cute"]
        );
    }
}
