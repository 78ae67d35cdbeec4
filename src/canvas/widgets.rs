pub mod history;
pub mod notification;
