//! `lift-arrivals` — reading passenger arrivals from delimited files.
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`loader`] | `load_passengers_csv`, `load_passengers_reader`, `load_passengers_or_empty` |
//! | [`error`]  | `ArrivalsError`, `ArrivalsResult<T>`                        |

pub mod error;
pub mod loader;


pub use error::{ArrivalsError, ArrivalsResult};
pub use loader::{load_passengers_csv, load_passengers_or_empty, load_passengers_reader};
