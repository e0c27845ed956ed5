mod app_info;
mod app_state;
mod app_status;
mod apps_map;

pub use app_info::ApplicationInfo;
pub use app_state::ApplicationState;
pub use app_status::{compute_status, ApplicationStatus};
pub use apps_map::ApplicationsMap;
