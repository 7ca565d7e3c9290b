//! Background Tasks Module
//!
//! # Tasks
//! - Sweeper: removes expired cache entries at a configured interval

mod sweeper;

pub use sweeper::spawn_sweeper;
