pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod pacer;
pub mod timing;
pub mod token;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::PacerConfig;
pub use error::PacerError;
pub use event::{DisplayPayload, PacerEvent};
pub use focus::{split_at_pivot, FocusSplit};
pub use pacer::{Pacer, PacerState};
pub use timing::tick_interval_ms;
pub use token::tokenize;
