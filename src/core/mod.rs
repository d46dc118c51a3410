pub mod accessor;
pub mod primitives;
pub mod record;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use accessor::{Accessor, RecordField};
pub use record::{
    MalformedRecordPolicy, RaceTime, RawRecord, Record, RecordSet, SkippedRecord, YearField,
};
pub use scale::{LinearScale, MAX_TICKS, extent};
pub use time_scale::{DEFAULT_TIME_TICK_COUNT, TimeInterval, TimeScale};
pub use types::{Dimensions, Margin, Viewport};
