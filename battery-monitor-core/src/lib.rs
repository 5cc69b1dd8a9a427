#![cfg_attr(not(feature = "std"), no_std)]

pub mod battery;
pub mod config;
pub mod errors;
pub mod logging;
pub mod message;
