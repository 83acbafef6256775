mod date;
pub use date::{DateError, MinutesDate};

mod fetch;
pub use fetch::{FetchError, Fetcher, HttpFetcher};

pub mod html;
pub use html::{ParseError, parse_sections};

mod locate;
pub use locate::{LocateError, join_url, recent_minutes_href};
