use super::{
    list::OrderedList,
    types::{Query, Record, Song, SongFields, SongFieldsError},
};
use log::{debug, info, trace};
use std::{convert::TryFrom, error::Error, path::Path};

/// Header columns written before the sort key column.
const REPORT_COLUMNS: [&str; 3] = ["released", "track_name", "artist(s)_name"];

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

pub struct SongReader<R> {
    record_iter: csv::DeserializeRecordsIntoIter<R, SongFields>,
    record: u64,
}

impl SongReader<std::fs::File> {
    pub fn from_path<P: AsRef<Path>>(input_filename: P) -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_reader(builder().from_path(input_filename)?))
    }
}

impl<R: std::io::Read> SongReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self::with_reader(builder().from_reader(reader))
    }

    fn with_reader(reader: csv::Reader<R>) -> Self {
        Self {
            record_iter: reader.into_deserialize(),
            record: 0,
        }
    }
}

impl<R: std::io::Read> Iterator for SongReader<R> {
    type Item = Result<Song, Box<dyn Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.record_iter.next()?;
        self.record += 1;

        Some(match result {
            Ok(fields) => Song::try_from(fields).map_err(|source| -> Box<dyn Error> {
                Box::new(InvalidRecord {
                    record: self.record,
                    source,
                })
            }),
            Err(e) => Err(e.into()),
        })
    }
}

/// Read every song, keeping those accepted by `query` in the order it asks for. The
/// first malformed row aborts the load.
pub fn load<R: std::io::Read>(
    songs: SongReader<R>,
    query: &Query,
) -> Result<OrderedList, Box<dyn Error>> {
    let mut list = OrderedList::new();
    let mut read = 0;

    for result in songs {
        let song = result?;
        read += 1;

        if !query.accepts(&song) {
            trace!("Skipping \"{}\" by {}", song.title, song.artists);
            continue;
        }

        debug!("Keeping \"{}\" by {}", song.title, song.artists);
        list.insert_ordered(Record::from_song(song, query.sort_field), query.direction);
    }

    info!("Read {} songs, {} matched", read, list.len());

    Ok(list)
}

/// Write the report header and up to `query.limit` records in list order.
pub fn write_report<W: std::io::Write>(
    list: &OrderedList,
    query: &Query,
    f: W,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(f);

    writer.write_record(
        REPORT_COLUMNS
            .iter()
            .copied()
            .chain(std::iter::once(query.sort_field.column())),
    )?;

    list.for_each(query.limit, &mut writer, |record, writer| {
        let sort_key = record.sort_key().to_string();
        writer.write_record(&[record.date(), record.title(), record.artists(), sort_key.as_str()])
    })?;

    writer.flush()?;

    Ok(())
}

/// A row that parsed as CSV but was rejected when building a `Song`.
#[derive(Debug)]
pub struct InvalidRecord {
    pub record: u64,
    pub source: SongFieldsError,
}

impl std::fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record {}: {}", self.record, self.source)
    }
}

impl Error for InvalidRecord {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
