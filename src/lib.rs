// Datekit - calendar and date-time utility library
// Pure transformations over UTC instants against an injected time zone

pub mod calendar;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;

pub use calendar::Calendar;
pub use error::DateError;
pub use format::{convert_format, DateStyle};
pub use models::components::{CalendarComponents, WeekDay};
pub use models::offset::TimeOffset;
pub use models::unit::DateUnit;
