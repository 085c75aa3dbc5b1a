use std::{convert::TryFrom, error::Error};

/// A validated row of the song dataset. Only the columns the filter and the sort keys
/// need are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    pub artists: String,
    pub released_year: i32,
    pub released_month: u32,
    pub released_day: u32,
    pub spotify_playlists: i64,
    pub streams: i64,
    pub apple_playlists: i64,
}

impl Song {
    /// Release date as `year-month-day`, without zero padding.
    pub fn released(&self) -> String {
        format!(
            "{}-{}-{}",
            self.released_year, self.released_month, self.released_day
        )
    }
}

impl TryFrom<SongFields> for Song {
    type Error = SongFieldsError;

    fn try_from(fields: SongFields) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&fields.released_month) || !(1..=31).contains(&fields.released_day)
        {
            return Err(SongFieldsError::InvalidReleaseDate {
                year: fields.released_year,
                month: fields.released_month,
                day: fields.released_day,
            });
        }

        Ok(Song {
            title: fields.track_name,
            artists: fields.artists,
            released_year: fields.released_year,
            released_month: fields.released_month,
            released_day: fields.released_day,
            spotify_playlists: fields.in_spotify_playlists,
            streams: fields.streams,
            apple_playlists: fields.in_apple_playlists,
        })
    }
}

/// Raw row as laid out in the CSV. Columns are matched by header name, so extra columns
/// in the dataset (bpm, key, mode, ...) are simply ignored.
#[derive(serde::Deserialize, Debug)]
pub struct SongFields {
    pub track_name: String,
    #[serde(rename = "artist(s)_name")]
    pub artists: String,
    pub released_year: i32,
    pub released_month: u32,
    pub released_day: u32,
    pub in_spotify_playlists: i64,
    pub streams: i64,
    pub in_apple_playlists: i64,
}

/// This error is returned when a row parses but its values don't make sense.
#[derive(Debug, PartialEq)]
pub enum SongFieldsError {
    InvalidReleaseDate { year: i32, month: u32, day: u32 },
}

impl std::fmt::Display for SongFieldsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReleaseDate { year, month, day } => {
                write!(f, "Invalid release date {}-{}-{}", year, month, day)
            }
        }
    }
}

impl Error for SongFieldsError {}

#[cfg(test)]
mod tests {
    use super::{Song, SongFields, SongFieldsError};
    use std::convert::TryFrom;

    fn fields(month: u32, day: u32) -> SongFields {
        SongFields {
            track_name: "Levitating".into(),
            artists: "Dua Lipa, DaBaby".into(),
            released_year: 2020,
            released_month: month,
            released_day: day,
            in_spotify_playlists: 7012,
            streams: 1802514301,
            in_apple_playlists: 75,
        }
    }

    #[test]
    fn test_valid_fields() {
        let song = Song::try_from(fields(3, 27)).unwrap();

        assert_eq!(song.title, "Levitating");
        assert_eq!(song.artists, "Dua Lipa, DaBaby");
        assert_eq!(song.spotify_playlists, 7012);
        assert_eq!(song.streams, 1802514301);
        assert_eq!(song.apple_playlists, 75);
    }

    #[test]
    fn test_released_is_not_padded() {
        let song = Song::try_from(fields(3, 7)).unwrap();
        assert_eq!(song.released(), "2020-3-7");

        let song = Song::try_from(fields(12, 31)).unwrap();
        assert_eq!(song.released(), "2020-12-31");
    }

    #[test]
    fn test_invalid_release_date() {
        assert_eq!(
            Song::try_from(fields(13, 1)),
            Err(SongFieldsError::InvalidReleaseDate {
                year: 2020,
                month: 13,
                day: 1
            })
        );
        assert!(Song::try_from(fields(0, 1)).is_err());
        assert!(Song::try_from(fields(1, 0)).is_err());
        assert!(Song::try_from(fields(1, 32)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SongFieldsError::InvalidReleaseDate {
                year: 2023,
                month: 2,
                day: 40
            }
            .to_string(),
            "Invalid release date 2023-2-40"
        );
    }
}
