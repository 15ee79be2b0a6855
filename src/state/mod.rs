//! State Management
//!
//! Shared context state plus the self-contained view-models behind the
//! interactive sections: the peer comparison table and the chart axis
//! bindings, along with the statement grid helpers.

pub mod chart;
pub mod global;
pub mod peers;
pub mod statements;

pub use chart::{AxisBindings, AxisSlot, Metric, SeriesPoint};
pub use global::{provide_global_state, GlobalState};
pub use peers::{Column, ColumnKind, PeerTable};
