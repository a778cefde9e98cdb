//! Menu items riding the carousel
//!
//! Pure data: the simulation only ever reads titles (for collider sizing)
//! and list positions. Slice order is angular order, so the item at index
//! `i` occupies ring slot `i`.

use serde::{Deserialize, Serialize};

/// Category of a menu destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Projects,
    Contact,
    About,
    Consulting,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Projects,
        ItemKind::Contact,
        ItemKind::About,
        ItemKind::Consulting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Projects => "projects",
            ItemKind::Contact => "contact",
            ItemKind::About => "about",
            ItemKind::Consulting => "consulting",
        }
    }
}

/// One entry on the carousel ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    /// Label rendered on the ring; its length drives collider height
    pub title: String,
    /// Destination the host navigates to when the item is selected
    pub route: String,
    pub kind: ItemKind,
    /// Longer blurb for hosts that render detail panels
    #[serde(default)]
    pub description: String,
}

impl CarouselItem {
    pub fn new(title: impl Into<String>, route: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            title: title.into(),
            route: route.into(),
            kind,
            description: String::new(),
        }
    }
}
