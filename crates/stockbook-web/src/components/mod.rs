mod charts;
mod kpi;
mod leaderboard;
mod notices;
mod section;
mod stock_indicator;
mod view_toggle;

pub use charts::{SplitBar, TrendChart};
pub use kpi::Kpi;
pub use leaderboard::Leaderboard;
pub use notices::NoticeStack;
pub use section::Section;
pub use stock_indicator::StockIndicator;
pub use view_toggle::ViewToggle;
