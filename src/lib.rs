pub mod analysis;
pub mod calendar;
pub mod constants;
pub mod errors;
pub mod funds;
pub mod performance;

pub use analysis::*;
pub use calendar::{BusinessCalendarTrait, WeekdayCalendar};
pub use funds::*;
pub use performance::*;
