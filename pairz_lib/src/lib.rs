//! Tournament registration and bracket pairing.
//!
//! The library is UI-agnostic: operations return structured results and
//! [`messages::CmdMessage`] values, and the three side-effecting concerns
//! (randomness, authorization, rendering) sit behind capability traits so
//! the core stays deterministic and testable:
//!
//! - [`pairing::Shuffler`]: injected randomness for band shuffling
//! - [`auth::Authorizer`]: gate for the admin registry view
//! - [`presenter::Presenter`]: consumer of the finalized pairing rows

pub mod auth;
pub mod error;
pub mod messages;
pub mod model;
pub mod pairing;
pub mod presenter;
pub mod registry;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
