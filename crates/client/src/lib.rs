//! campus API 客户端数据层：类型化 HTTP 调用，以及管理页面使用的多步流程。

pub mod cache;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod orchestration;
pub mod search;

pub use cache::SessionCache;
pub use client::CampusClient;
pub use dashboard::{CourseCard, Dashboard};
pub use error::{ClientError, Result};
pub use orchestration::{save_student, save_teacher};
pub use search::search_people;
