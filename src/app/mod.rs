pub mod navigation;
pub mod panels;
pub mod state;
pub mod views;

pub use navigation::{Session, User, UserRole, View};
pub use panels::{Panel, PanelState};
pub use state::AppState;
pub use views::Dashboards;
