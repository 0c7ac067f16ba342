use crate::models::{MediaEntry, MediaType};

/// Media type filter for the watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    Tv,
}

impl TypeFilter {
    pub const ALL: &[TypeFilter] = &[Self::All, Self::Movie, Self::Tv];

    pub fn matches(self, media_type: MediaType) -> bool {
        match self {
            Self::All => true,
            Self::Movie => media_type == MediaType::Movie,
            Self::Tv => media_type == MediaType::Tv,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Movie => write!(f, "Movies"),
            Self::Tv => write!(f, "TV Shows"),
        }
    }
}

/// Entries whose media type passes `filter`, in their original order.
pub fn filter_by_type(entries: &[MediaEntry], filter: TypeFilter) -> Vec<&MediaEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry.media_type))
        .collect()
}
