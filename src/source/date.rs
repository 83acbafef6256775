use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use super::locate::join_url;

const FORMAT: &str = "%m/%d/%Y";

/// The date of a meeting, written `mm/dd/yyyy` on the wiki.
///
/// Minutes for a past meeting live at `<base url>/<mm/dd/yyyy>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinutesDate(NaiveDate);

impl MinutesDate {
    /// The calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// The URL of this meeting's minutes.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.to_string())
    }
}

impl From<NaiveDate> for MinutesDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for MinutesDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), FORMAT)
            .map(Self)
            .map_err(|source| DateError {
                input: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for MinutesDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

/// Error returned when a meeting date is not a real `mm/dd/yyyy` date.
#[derive(Debug, thiserror::Error)]
#[error("invalid meeting date '{input}': expected mm/dd/yyyy")]
pub struct DateError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn parses_and_displays() {
        let date: MinutesDate = "03/10/2015".parse().unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2015, 3, 10).unwrap());
        assert_eq!(date.to_string(), "03/10/2015");
    }

    #[test]
    fn builds_page_url() {
        let date = MinutesDate::from(NaiveDate::from_ymd_opt(2014, 12, 2).unwrap());
        assert_eq!(
            date.url("http://wiki.lvl1.org"),
            "http://wiki.lvl1.org/12/02/2014"
        );
    }

    #[test_case("13/01/2015"; "month out of range")]
    #[test_case("02/30/2015"; "day out of range")]
    #[test_case("2015-03-10"; "iso format")]
    #[test_case("03/10/2015/../.."; "trailing path")]
    #[test_case("last tuesday"; "words")]
    #[test_case(""; "empty")]
    fn rejects_malformed_dates(input: &str) {
        let error = input.parse::<MinutesDate>().unwrap_err();
        assert!(error.to_string().contains("expected mm/dd/yyyy"));
    }
}
