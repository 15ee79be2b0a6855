//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart_section;
pub mod company_info;
pub mod debate;
pub mod dialog;
pub mod documents;
pub mod peer_comparison;
pub mod statements;
pub mod toast;

pub use chart_section::ChartSection;
pub use company_info::CompanyInfo;
pub use debate::Debate;
pub use dialog::Dialog;
pub use documents::Documents;
pub use peer_comparison::PeerComparison;
pub use statements::Statements;
pub use toast::Toast;
