pub mod assessment;
pub mod couple;
pub mod doctor;

pub use assessment::{AddItemArgs, AssessmentCommands};
pub use couple::CoupleCommands;
pub use doctor::DoctorCommands;
