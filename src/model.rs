//! Core data models for the star map.
//! Stars are immutable reference data; everything positional is derived.

use serde::Deserialize;

/// A star on the map. Content stars back an article; ambient stars are
/// decoration and carry placeholder text.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Full article body; paragraphs separated by `\n`.
    pub content: String,
    pub category: String,
    /// Free-form date label, e.g. "Oct 12, 2023".
    pub date: String,
    pub color: String,
    /// Marker size in CSS px.
    pub size: f64,
    /// Authored position in % of the viewport.
    pub x: f64,
    pub y: f64,
    /// Float animation period in seconds.
    pub speed: f64,
    /// Float animation phase offset in seconds.
    pub delay: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: &str, author: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
        }
    }
}

/// How content stars are arranged on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClusterMode {
    /// Authored coordinates, untouched.
    Free,
    /// Grouped by category tag.
    Category,
    /// Grouped by the year found in the date label.
    #[default]
    Year,
}

impl ClusterMode {
    pub const ALL: [ClusterMode; 3] = [ClusterMode::Free, ClusterMode::Category, ClusterMode::Year];

    pub fn label(self) -> &'static str {
        match self {
            ClusterMode::Free => "Free",
            ClusterMode::Category => "Topic",
            ClusterMode::Year => "Time",
        }
    }
}

/// A derived on-screen position in % of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPosition {
    pub x: f64,
    pub y: f64,
}
