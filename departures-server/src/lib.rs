//! RealTime Trains departure board proxy.
//!
//! A small web service that fetches live departures from the RealTime
//! Trains API and re-exposes them as JSON and as xbar menu text for a
//! desktop status-bar widget.

pub mod rtt;
pub mod web;
pub mod xbar;
