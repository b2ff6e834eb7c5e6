//! Testimonial carousel with wrapping navigation.

use serde::{Deserialize, Serialize};

/// A customer testimonial slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    #[serde(default)]
    pub role: String,
    pub quote: String,
    /// Star rating, 1 to 5.
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// Rating as filled and empty stars, e.g. `★★★★☆`.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Testimonials shown when none are configured.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Maria Lopez".to_string(),
            role: "Regular customer".to_string(),
            quote: "The tacos arrive hot every single time.".to_string(),
            rating: 5,
        },
        Testimonial {
            author: "James Carter".to_string(),
            role: "Office lunch organiser".to_string(),
            quote: "Ordering for twelve people took two minutes.".to_string(),
            rating: 5,
        },
        Testimonial {
            author: "Aiko Tanaka".to_string(),
            role: "Food blogger".to_string(),
            quote: "Best ramen delivery in town, hands down.".to_string(),
            rating: 4,
        },
    ]
}

/// Slides with a current index; navigation wraps at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    slides: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    pub fn new(slides: Vec<T>) -> Self {
        Self { slides, index: 0 }
    }

    /// Current slide, `None` when there are no slides.
    pub fn current(&self) -> Option<&T> {
        self.slides.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        self.step(1)
    }

    pub fn prev(&mut self) -> Option<&T> {
        self.step(-1)
    }

    /// Jump to `index`, wrapping out-of-range values (negative counts from the end).
    pub fn go_to(&mut self, index: i64) -> Option<&T> {
        let len = self.slides.len() as i64;
        if len > 0 {
            self.index = index.rem_euclid(len) as usize;
        }
        self.current()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    fn step(&mut self, delta: i64) -> Option<&T> {
        self.go_to(self.index as i64 + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"]);
        assert_eq!(carousel.next(), Some(&"b"));
        assert_eq!(carousel.next(), Some(&"c"));
        assert_eq!(carousel.next(), Some(&"a"));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"]);
        assert_eq!(carousel.prev(), Some(&"c"));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_go_to_wraps() {
        let mut carousel = Carousel::new(vec![1, 2, 3]);
        assert_eq!(carousel.go_to(7), Some(&2));
        assert_eq!(carousel.go_to(-1), Some(&3));
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel: Carousel<Testimonial> = Carousel::new(Vec::new());
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_stars() {
        let mut t = default_testimonials().remove(2);
        assert_eq!(t.stars(), "★★★★☆");
        t.rating = 9;
        assert_eq!(t.stars(), "★★★★★");
    }
}
