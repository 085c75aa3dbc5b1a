use super::Song;
use std::error::Error;

/// Which column a filter value is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterField {
    #[value(name = "ARTIST")]
    Artist,
    #[value(name = "YEAR")]
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-sensitive substring of the `artist(s)_name` column.
    Artist(String),
    /// Exact `released_year`.
    Year(i32),
}

impl Filter {
    pub fn parse(field: FilterField, value: &str) -> Result<Self, QueryError> {
        match field {
            FilterField::Artist => Ok(Filter::Artist(value.to_owned())),
            FilterField::Year => value
                .trim()
                .parse()
                .map(Filter::Year)
                .map_err(|_| QueryError::InvalidYear(value.to_owned())),
        }
    }

    pub fn matches(&self, song: &Song) -> bool {
        match self {
            Filter::Artist(name) => song.artists.contains(name.as_str()),
            Filter::Year(year) => song.released_year == *year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortField {
    #[value(name = "STREAMS")]
    Streams,
    #[value(name = "NO_SPOTIFY_PLAYLISTS")]
    SpotifyPlaylists,
    #[value(name = "NO_APPLE_PLAYLISTS")]
    ApplePlaylists,
}

impl SortField {
    /// Name of the source column, which is also the last column of the report header.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Streams => "streams",
            SortField::SpotifyPlaylists => "in_spotify_playlists",
            SortField::ApplePlaylists => "in_apple_playlists",
        }
    }

    pub fn key(&self, song: &Song) -> i64 {
        match self {
            SortField::Streams => song.streams,
            SortField::SpotifyPlaylists => song.spotify_playlists,
            SortField::ApplePlaylists => song.apple_playlists,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    #[value(name = "ASC")]
    Ascending,
    #[value(name = "DESC")]
    Descending,
}

/// Everything the loader and reporter need to know about one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub sort_field: SortField,
    pub direction: Direction,
    /// Maximum number of rows to report; 0 means no limit.
    pub limit: usize,
}

impl Query {
    /// Build a query from the loose command line pieces. A filter field and its value
    /// must be given together.
    pub fn new(
        filter_field: Option<FilterField>,
        value: Option<&str>,
        sort_field: SortField,
        direction: Direction,
        limit: Option<usize>,
    ) -> Result<Self, QueryError> {
        let filter = match (filter_field, value) {
            (Some(field), Some(value)) => Some(Filter::parse(field, value)?),
            (Some(field), None) => return Err(QueryError::MissingValue(field)),
            (None, Some(value)) => return Err(QueryError::ValueWithoutFilter(value.to_owned())),
            (None, None) => None,
        };

        Ok(Self {
            filter,
            sort_field,
            direction,
            limit: limit.unwrap_or(0),
        })
    }

    pub fn accepts(&self, song: &Song) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |filter| filter.matches(song))
    }
}

#[derive(Debug, PartialEq)]
pub enum QueryError {
    MissingValue(FilterField),
    ValueWithoutFilter(String),
    InvalidYear(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue(field) => {
                write!(f, "Filter {:?} needs a value (--value)", field)
            }
            Self::ValueWithoutFilter(value) => {
                write!(f, "Value \"{}\" given without a filter (--filter)", value)
            }
            Self::InvalidYear(value) => write!(f, "Year \"{}\" is not a number", value),
        }
    }
}

impl Error for QueryError {}
