//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 后端接口的数据结构（项目、成员、公共代码）
//! - 统一响应信封
//! - 程序配置

pub mod models;

// 重新导出常用类型
pub use models::{
    ApiEnvelope, AppConfig, CommCdDto, CommCdMap, CommCdReqDto, MemDto, MemReqDto, PrjDto, PrjReqDto,
};
