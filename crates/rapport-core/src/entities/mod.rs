mod assessment;
mod couple;
mod dashboard;
mod doctor;
mod prediction;
mod question;

pub use assessment::Assessment;
pub use couple::Couple;
pub use dashboard::{Dashboard, DashboardRow};
pub use doctor::Doctor;
pub use prediction::PredictionOutcome;
pub use question::Question;
