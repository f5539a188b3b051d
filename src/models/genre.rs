use std::collections::BTreeMap;

use super::TmdbGenre;

/// Name reported for genre ids missing from the table
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Genre id → name lookup, iterated in id order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreTable {
    genres: BTreeMap<u32, String>,
}

impl GenreTable {
    pub fn from_genres(genres: impl IntoIterator<Item = TmdbGenre>) -> Self {
        Self {
            genres: genres.into_iter().map(|g| (g.id, g.name)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Resolves an id to its name, or [`UNKNOWN_GENRE`]
    pub fn name_for(&self, id: u32) -> &str {
        self.genres.get(&id).map(String::as_str).unwrap_or(UNKNOWN_GENRE)
    }

    /// Finds the genre a free-text filter refers to.
    ///
    /// Matching is case-insensitive. An exact name match wins; otherwise the
    /// shortest name containing `text` is picked, lowest id on ties. Blank
    /// text matches nothing.
    pub fn find_id(&self, text: &str) -> Option<u32> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<(u32, usize)> = None;
        for (&id, name) in &self.genres {
            let name = name.to_lowercase();
            if name == needle {
                return Some(id);
            }
            if !name.contains(&needle) {
                continue;
            }
            // BTreeMap walks ids ascending, so strict `<` keeps the lowest id
            let len = name.chars().count();
            if best.map_or(true, |(_, best_len)| len < best_len) {
                best = Some((id, len));
            }
        }

        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: u32, name: &str) -> TmdbGenre {
        TmdbGenre {
            id,
            name: name.to_string(),
        }
    }

    fn table() -> GenreTable {
        GenreTable::from_genres(vec![
            genre(28, "Action"),
            genre(10759, "Action & Adventure"),
            genre(12, "Adventure"),
            genre(35, "Comedy"),
            genre(10751, "Family"),
            genre(878, "Science Fiction"),
        ])
    }

    #[test]
    fn test_name_for_known_and_unknown_ids() {
        let table = table();
        assert_eq!(table.name_for(28), "Action");
        assert_eq!(table.name_for(999_999), "Unknown");
    }

    #[test]
    fn test_find_id_is_case_insensitive_substring() {
        let table = table();
        assert_eq!(table.find_id("comed"), Some(35));
        assert_eq!(table.find_id("FICTION"), Some(878));
        assert_eq!(table.find_id("  family "), Some(10751));
    }

    #[test]
    fn test_find_id_prefers_exact_match() {
        let table = table();
        assert_eq!(table.find_id("action"), Some(28));
        assert_eq!(table.find_id("adventure"), Some(12));
    }

    #[test]
    fn test_find_id_prefers_shortest_containing_name() {
        let table = table();
        // "Action" and "Action & Adventure" both contain "act"
        assert_eq!(table.find_id("act"), Some(28));
        // "Adventure" is shorter than "Action & Adventure"
        assert_eq!(table.find_id("advent"), Some(12));
    }

    #[test]
    fn test_find_id_ties_resolve_to_lowest_id() {
        let table = GenreTable::from_genres(vec![genre(40, "Drama"), genre(18, "Crime")]);
        // both names are five characters long and contain "r"
        assert_eq!(table.find_id("r"), Some(18));
    }

    #[test]
    fn test_find_id_misses() {
        let table = table();
        assert_eq!(table.find_id("nonexistentgenrexyz"), None);
        assert_eq!(table.find_id(""), None);
        assert_eq!(table.find_id("   "), None);
        assert_eq!(GenreTable::default().find_id("action"), None);
    }

    #[test]
    fn test_later_duplicate_id_replaces_earlier_name() {
        let table = GenreTable::from_genres(vec![genre(1, "Old"), genre(1, "New")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.name_for(1), "New");
    }
}
