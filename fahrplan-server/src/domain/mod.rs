//! Domain types for the trip search service.
//!
//! This module contains the core domain model types. Types that carry
//! invariants (station ids, train categories, trip timing) enforce them at
//! construction time, so code that receives these types can trust their
//! validity.

mod delay;
pub mod format;
mod station;
mod train;
mod trip;

pub use delay::DelaySeverity;
pub use station::{Coordinates, InvalidStationId, Station, StationId};
pub use train::{TrainType, UnknownTrainType};
pub use trip::{Connection, Trip};
