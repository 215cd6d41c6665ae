#![cfg_attr(not(feature = "std"), no_std)]

//! Two-player grid battleship engine: fleet placement, guess resolution,
//! sink and win detection, and an append-only log of what happened.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coordinate;
mod event;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use event::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
