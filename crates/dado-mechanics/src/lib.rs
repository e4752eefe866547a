//! Dice resolution engine for dado.
//!
//! A [`Roller`] turns roll requests into outcome records from `dado-core`:
//! success-counting pools (with the keep-lower penalty roll for collapsed
//! pools), damage totals, custom NdY rolls, and the legacy keep-one
//! advantage/disadvantage ruleset.

pub mod clock;
pub mod config;
pub mod legacy;
pub mod resolve;
pub mod roller;
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RollerConfig;
pub use legacy::{LegacyRequest, LegacyResult, Vantage};
pub use resolve::{CUSTOM_MAX_QUANTITY, CUSTOM_MAX_SIDES};
pub use roller::Roller;
pub use source::{DieSource, RngSource, ScriptedSource};
