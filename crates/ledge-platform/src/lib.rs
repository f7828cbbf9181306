//! OS integration kept behind small functions: global cursor sampling,
//! display work-area lookup, external link opening.

pub mod cursor;
pub mod external;
pub mod monitors;

pub use cursor::global_cursor_position;
pub use external::open_external;
pub use monitors::work_area_for;
