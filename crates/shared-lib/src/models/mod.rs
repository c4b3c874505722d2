pub mod common;
pub mod config;
pub mod member;
pub mod project;

// 重新导出具体的类型
pub use common::{ApiEnvelope, CommCdDto, CommCdMap, CommCdReqDto};
pub use config::AppConfig;
pub use member::{MemDto, MemReqDto};
pub use project::{PrjDto, PrjReqDto};
