pub mod card;
pub mod identity;
pub mod planner;
pub mod plugin;
pub mod sidebar;

pub use card::{GpsSignal, StatusCard};
pub use identity::DroneId;
pub use planner::{PlannerStatus, Position};
pub use plugin::DronePlugin;
pub use sidebar::render_sidebar;
