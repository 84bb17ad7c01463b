//! snipr: one query box, many answers.
//!
//! A query is classified by a set of independent predicates
//! ([`dispatch::Dispatch`]) and every widget that applies (calculator,
//! currency card, timer, stopwatch, dictionary, infobox, translation) is
//! mounted and loads itself from the remote services ([`client::ApiClient`]).

pub mod calculator;
pub mod client;
pub mod config;
pub mod currency;
pub mod dispatch;
pub mod items;
pub mod stopwatch;
pub mod timer;
pub mod translate;
pub mod ui;
pub mod widgets;
pub mod word;

pub use client::{ApiClient, ApiError, RequestSequencer, RequestToken};
pub use config::Config;
pub use dispatch::Dispatch;
