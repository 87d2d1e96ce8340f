use super::{FIELD_SEPARATOR, RecordTerminator};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes delimited flat records to any `Write` sink, one terminator after
/// every record. Field values are written verbatim.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W, terminator: RecordTerminator) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(FIELD_SEPARATOR)
            .terminator(terminator.into())
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_records<'a, T, I>(&mut self, records: I) -> Result<()>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Encodes records into an in-memory buffer.
pub fn encode<T: Serialize>(records: &[T], terminator: RecordTerminator) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    RecordWriter::new(&mut buffer, terminator).write_records(records)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, Money, Phone};
    use crate::domain::payment::{Favorite, Payment, PaymentStatus};

    #[test]
    fn test_account_record_layout() {
        let mut account = Account::new(1, Phone::from("+992000000001"));
        account.balance = Money::new(10_00);

        let bytes = encode(&[account], RecordTerminator::Record).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "1;+992000000001;1000|");
    }

    #[test]
    fn test_payment_record_layout() {
        let payment = Payment {
            id: "p1".to_string(),
            account_id: 3,
            amount: Money::new(15),
            category: "auto".to_string(),
            status: PaymentStatus::Fail,
        };

        let bytes = encode(&[payment], RecordTerminator::Line).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "p1;3;15;auto;FAIL\n");
    }

    #[test]
    fn test_favorite_record_layout() {
        let favorite = Favorite {
            id: "f1".to_string(),
            account_id: 2,
            name: "home".to_string(),
            amount: Money::new(7),
            category: "rent".to_string(),
        };

        let bytes = encode(&[favorite], RecordTerminator::Record).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "f1;2;home;7;rent|");
    }

    #[test]
    fn test_fields_are_not_quoted() {
        let account = Account::new(1, Phone::from("+992 \"mobile\""));
        let bytes = encode(&[account], RecordTerminator::Record).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "1;+992 \"mobile\";0|");
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let bytes = encode::<Account>(&[], RecordTerminator::Record).unwrap();
        assert!(bytes.is_empty());
    }
}
