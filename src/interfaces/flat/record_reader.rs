use super::{FIELD_SEPARATOR, RecordTerminator};
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads delimited flat records from any `Read` source.
///
/// Quoting is disabled: a `"` is an ordinary character and there is no escape
/// for the field or record separators.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R, terminator: RecordTerminator) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(FIELD_SEPARATOR)
            .terminator(terminator.into())
            .quoting(false)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily deserializes records.
    pub fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(Into::into))
    }
}
