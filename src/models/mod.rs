pub mod announcement;
pub mod wechat;
