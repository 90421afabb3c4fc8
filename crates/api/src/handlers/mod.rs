mod models;
mod state;
mod validator;
mod health;
mod subtitles;
mod listing;
mod config;

pub use models::AppState;
pub use validator::validate_video_id;
pub use health::health_check;
pub use subtitles::{get_subtitle, get_subtitle_info};
pub use listing::list_subtitles;
pub use config::get_config;
