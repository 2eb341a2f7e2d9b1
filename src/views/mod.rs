mod calculator;
mod dashboard;
mod planner;
mod profile;
mod scan;
pub mod shared;

pub use calculator::CalculatorView;
pub use dashboard::DashboardView;
pub use planner::PlannerView;
pub use profile::ProfileView;
pub use scan::ScanView;
