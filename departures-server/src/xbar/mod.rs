//! Xbar menu output.
//!
//! Renders departures as a status-bar summary line (one icon per
//! service) plus a dropdown detail block, in the xbar plugin text
//! format: summary, `---` separator, detail lines.

mod delay;
mod render;

pub use delay::{delay_icon, departure_delay, format_hhmm, parse_hhmm};
pub use render::{StationPair, render_departures, render_fetch_error, resolve_direction, xbar_output};
