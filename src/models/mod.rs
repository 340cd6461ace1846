//! 数据模型模块
//! 用户与待办事项的数据库行、请求/响应 DTO

pub mod todo;
pub mod user;
