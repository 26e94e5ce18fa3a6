// ==========================================
// 年假规划引擎 - API层
// ==========================================
// 职责: 字符串化请求/响应边界与入参校验
// ==========================================

pub mod dto;
pub mod error;
pub mod planner_api;

// 重导出核心接口
pub use dto::{CompanyDayOffDto, HolidayDto, OptimizeRequestDto, OptimizeResponseDto};
pub use error::{PlannerError, PlannerResult};
pub use planner_api::PlannerApi;
