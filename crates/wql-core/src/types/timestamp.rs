use crate::error::ParseError;
use derive_more::{Deref, Display, From};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// Length of a full datetime literal: `YYYYMMDDHHMMSS.ffffff±UUU`.
pub const DATETIME_LEN: usize = 25;

// `YYYYMMDDHHMMSS.ffffff` prefix, then the offset sign.
const LOCAL_LEN: usize = 21;

// First offset digit; a short literal is padded here.
const PAD_AT: usize = 22;

///
/// Timestamp
///
/// Datetime field value. The zero value is the Unix epoch in UTC.
///

#[derive(Clone, Copy, Debug, Deref, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub const EPOCH: Self = Self(OffsetDateTime::UNIX_EPOCH);

    #[must_use]
    pub const fn new(datetime: OffsetDateTime) -> Self {
        Self(datetime)
    }

    #[must_use]
    pub const fn get(self) -> OffsetDateTime {
        self.0
    }

    /// Parse a source datetime literal.
    ///
    /// The canonical form is `YYYYMMDDHHMMSS.ffffff±UUU` with the UTC offset
    /// in minutes. A literal one character short is padded with `0` right
    /// after the offset sign first. The `±HHMM` offset form is also accepted.
    pub fn parse_datetime(literal: &str) -> Result<Self, ParseError> {
        let text = normalize_datetime(literal);
        if !text.is_ascii() {
            return Err(ParseError::timestamp(literal, "not an ASCII literal"));
        }

        let offset = match text.len() {
            DATETIME_LEN => parse_offset_minutes(&text[LOCAL_LEN..]),
            len if len == DATETIME_LEN + 1 => UtcOffset::parse(
                &text[LOCAL_LEN..],
                format_description!("[offset_hour sign:mandatory][offset_minute]"),
            )
            .map_err(|err| err.to_string()),
            len => Err(format!("expected {DATETIME_LEN} characters, found {len}")),
        }
        .map_err(|reason| ParseError::timestamp(literal, reason))?;

        let local = PrimitiveDateTime::parse(
            &text[..LOCAL_LEN],
            format_description!("[year][month][day][hour][minute][second].[subsecond digits:6]"),
        )
        .map_err(|err| ParseError::timestamp(literal, err.to_string()))?;

        Ok(Self(local.assume_offset(offset)))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.0.format(&Rfc3339).map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&text)
    }
}

/// Pad a literal that is exactly one character short of [`DATETIME_LEN`]
/// by inserting `0` after the offset sign. Other lengths pass through.
#[must_use]
pub fn normalize_datetime(literal: &str) -> Cow<'_, str> {
    if literal.len() != DATETIME_LEN - 1 || !literal.is_char_boundary(PAD_AT) {
        return Cow::Borrowed(literal);
    }

    let mut padded = String::with_capacity(DATETIME_LEN);
    padded.push_str(&literal[..PAD_AT]);
    padded.push('0');
    padded.push_str(&literal[PAD_AT..]);

    Cow::Owned(padded)
}

// `±UUU`: sign followed by the offset in whole minutes.
fn parse_offset_minutes(text: &str) -> Result<UtcOffset, String> {
    let (sign, digits) = text.split_at(1);
    let sign = match sign {
        "+" => 1,
        "-" => -1,
        other => return Err(format!("expected offset sign, found {other:?}")),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("expected offset minutes, found {digits:?}"));
    }
    let minutes: i32 = digits.parse().map_err(|err| format!("{err}"))?;

    UtcOffset::from_whole_seconds(sign * minutes * 60).map_err(|err| err.to_string())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use time::{Month, macros::datetime};

    #[test]
    fn full_literal_parses_with_minute_offset() {
        let ts = Timestamp::parse_datetime("20240315093012.123456+060").unwrap();
        assert_eq!(ts.get(), datetime!(2024-03-15 09:30:12.123456 +01:00));
    }

    #[test]
    fn negative_offset_parses() {
        let ts = Timestamp::parse_datetime("20231231235959.000000-300").unwrap();
        assert_eq!(ts.year(), 2023);
        assert_eq!(ts.month(), Month::December);
        assert_eq!(ts.offset().whole_minutes(), -300);
    }

    #[test]
    fn short_literal_is_padded_after_sign() {
        let short = "20240315093012.123456+60";
        assert_eq!(short.len(), DATETIME_LEN - 1);
        assert_eq!(normalize_datetime(short), "20240315093012.123456+060");

        let ts = Timestamp::parse_datetime(short).unwrap();
        assert_eq!(ts, Timestamp::parse_datetime("20240315093012.123456+060").unwrap());
    }

    #[test]
    fn full_literal_passes_through_unmodified() {
        let full = "20240315093012.123456+060";
        assert!(matches!(normalize_datetime(full), Cow::Borrowed(_)));
    }

    #[test]
    fn hour_minute_offset_form_is_accepted() {
        let ts = Timestamp::parse_datetime("20240315093012.000001+0130").unwrap();
        assert_eq!(ts.offset().whole_minutes(), 90);
        assert_eq!(ts.microsecond(), 1);
    }

    #[test]
    fn malformed_literals_are_parse_errors() {
        for literal in [
            "",
            "not a datetime",
            "20241315093012.123456+060",
            "20240315093012.123456*060",
            "20240315093012.123456+0x0",
            "2024031509301é.123456+060",
        ] {
            let err = Timestamp::parse_datetime(literal).unwrap_err();
            assert!(matches!(err, ParseError::Timestamp { .. }), "{literal}");
        }
    }

    #[test]
    fn default_is_epoch() {
        assert_eq!(Timestamp::default(), Timestamp::EPOCH);
        assert_eq!(Timestamp::default().unix_timestamp(), 0);
    }

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::parse_datetime("20240315093012.000000+060").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-03-15T09:30:12+01:00\"");
    }

    proptest! {
        #[test]
        fn short_literal_matches_padded_parse(
            year in 1970i32..2100,
            month in 1u8..=12,
            day in 1u8..=28,
            hour in 0u8..24,
            minute in 0u8..60,
            second in 0u8..60,
            micros in 0u32..1_000_000,
            offset in 0u32..100,
            negative in any::<bool>(),
        ) {
            let sign = if negative { '-' } else { '+' };
            let short = format!(
                "{year:04}{month:02}{day:02}{hour:02}{minute:02}{second:02}.{micros:06}{sign}{offset:02}"
            );
            prop_assert_eq!(short.len(), DATETIME_LEN - 1);

            let mut padded = short.clone();
            padded.insert(PAD_AT, '0');

            let a = Timestamp::parse_datetime(&short).unwrap();
            let b = Timestamp::parse_datetime(&padded).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
