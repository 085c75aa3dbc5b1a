use super::{Direction, Song, SortField};

/// One output row. Fields are private so a record can't change once it has been placed
/// in an `OrderedList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    date: String,
    title: String,
    artists: String,
    sort_key: i64,
}

impl Record {
    pub fn new(date: String, title: String, artists: String, sort_key: i64) -> Self {
        Self {
            date,
            title,
            artists,
            sort_key,
        }
    }

    /// Project a song onto the columns written out, keyed by `sort_field`.
    pub fn from_song(song: Song, sort_field: SortField) -> Self {
        let date = song.released();
        let sort_key = sort_field.key(&song);
        Self::new(date, song.title, song.artists, sort_key)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artists(&self) -> &str {
        &self.artists
    }

    pub fn sort_key(&self) -> i64 {
        self.sort_key
    }

    /// Whether `self` belongs in front of `other` in a list ordered by `direction`.
    /// Equal key and title never precede, so ties keep insertion order.
    pub fn precedes(&self, other: &Record, direction: Direction) -> bool {
        match direction {
            Direction::Ascending => {
                self.sort_key < other.sort_key
                    || (self.sort_key == other.sort_key && self.title < other.title)
            }
            Direction::Descending => {
                self.sort_key > other.sort_key
                    || (self.sort_key == other.sort_key && self.title > other.title)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Record, Song, SortField};

    fn record(title: &str, sort_key: i64) -> Record {
        Record::new("2023-1-1".into(), title.into(), "Artist".into(), sort_key)
    }

    #[test]
    fn test_from_song() {
        let song = Song {
            title: "Flowers".into(),
            artists: "Miley Cyrus".into(),
            released_year: 2023,
            released_month: 1,
            released_day: 12,
            spotify_playlists: 12211,
            streams: 1316855716,
            apple_playlists: 300,
        };

        let record = Record::from_song(song.clone(), SortField::ApplePlaylists);
        assert_eq!(record.date(), "2023-1-12");
        assert_eq!(record.title(), "Flowers");
        assert_eq!(record.artists(), "Miley Cyrus");
        assert_eq!(record.sort_key(), 300);

        assert_eq!(
            Record::from_song(song.clone(), SortField::Streams).sort_key(),
            1316855716
        );
        assert_eq!(
            Record::from_song(song, SortField::SpotifyPlaylists).sort_key(),
            12211
        );
    }

    #[test]
    fn test_precedes_ascending() {
        assert!(record("b", 1).precedes(&record("a", 2), Direction::Ascending));
        assert!(!record("a", 2).precedes(&record("b", 1), Direction::Ascending));

        // Ties broken by title
        assert!(record("a", 5).precedes(&record("b", 5), Direction::Ascending));
        assert!(!record("b", 5).precedes(&record("a", 5), Direction::Ascending));

        // Identical keys and titles don't precede each other
        assert!(!record("a", 5).precedes(&record("a", 5), Direction::Ascending));
    }

    #[test]
    fn test_precedes_descending() {
        assert!(record("a", 2).precedes(&record("b", 1), Direction::Descending));
        assert!(!record("b", 1).precedes(&record("a", 2), Direction::Descending));

        assert!(record("b", 5).precedes(&record("a", 5), Direction::Descending));
        assert!(!record("a", 5).precedes(&record("b", 5), Direction::Descending));

        assert!(!record("a", 5).precedes(&record("a", 5), Direction::Descending));
    }

    #[test]
    fn test_title_comparison_is_bytewise() {
        // Uppercase sorts before lowercase, as with a plain byte comparison
        assert!(record("Zebra", 1).precedes(&record("apple", 1), Direction::Ascending));
    }
}
