pub mod assessment;
pub mod couple;
pub mod dashboard;
pub mod dispatch;
pub mod doctor;
pub mod health;
pub mod session;
