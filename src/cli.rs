use super::types::{Direction, FilterField, Query, QueryError, SortField};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "song_filter", about = "Filter and sort a CSV of song metadata")]
pub struct Cli {
    /// CSV file to read
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Field to filter by; every song is kept when omitted
    #[arg(long, value_enum, requires = "value")]
    pub filter: Option<FilterField>,

    /// Artist name substring, or release year
    #[arg(long)]
    pub value: Option<String>,

    #[arg(long = "order_by", value_enum, default_value = "STREAMS")]
    pub order_by: SortField,

    #[arg(long, value_enum, default_value = "DESC")]
    pub order: Direction,

    /// Maximum number of songs to write; 0 or omitted means all
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_name = "FILE", default_value = "output.csv")]
    pub output: PathBuf,
}

impl Cli {
    pub fn query(&self) -> Result<Query, QueryError> {
        Query::new(
            self.filter,
            self.value.as_deref(),
            self.order_by,
            self.order,
            self.limit,
        )
    }
}
