mod dashboard;
mod entry;
mod gate;

pub use dashboard::DashboardPage;
pub use entry::EntryPage;
pub use gate::GatePage;
