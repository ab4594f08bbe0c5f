mod feedback;
pub use feedback::{ErrorBanner, Loading, Notice};

mod complaint_table;
pub use complaint_table::ComplaintTable;

mod admin;
pub use admin::AdminDashboard;

mod buildings;
mod users;
mod analytics;

mod owner;
pub use owner::{OwnerDashboard, BUILDING_NAMES};

mod tenant;
pub use tenant::TenantDashboard;

mod employee;
pub use employee::EmployeeDashboard;

mod unauthorized;
pub use unauthorized::UnauthorizedView;
