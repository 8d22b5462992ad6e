//! Domain models for the observation manager
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Session`] - Credentials issued by the backend
//! - [`Target`] - A registered celestial object
//! - [`Observation`] - A request to observe targets, with its [`ObservationStatus`]

mod observation;
mod session;
mod target;
mod timestamp;

pub use observation::{
    NewObservation, Observation, ObservationRequestError, ObservationStatus, Priority,
};
pub use session::{ACCESS_TOKEN_LIFETIME_SECS, RenewedToken, Session};
pub use target::{CoordinateUpdate, Target};
pub use timestamp::parse_timestamp;
