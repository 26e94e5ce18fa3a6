// ==========================================
// 年假规划引擎 - 核心库
// ==========================================
// 系统定位: 单年年假方案优化 (纯计算, 无 I/O)
// 输入: 年假额度 + 优化风格 + 法定假日 + 公司休息日
// 输出: 标注日数组 + 假期段列表 + 整体统计
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 策略参数
pub mod config;

// 引擎层 - 规划流水线
pub mod engine;

// API 层 - 字符串化边界
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BreakPeriod, CandidateSegment, CompanyDayRule, HolidayInput, OptimizationStrategy, PlanDay,
    PlanStats,
};

// 配置
pub use config::StrategyProfile;

// 引擎
pub use engine::{
    BreakExtender, CalendarBuilder, CandidateGenerator, DominancePruner, PlanOrchestrator,
    PlanOutcome, PlanRequest, QuotaFiller, SegmentSelector, StatsAssembler,
};

// API
pub use api::{OptimizeRequestDto, OptimizeResponseDto, PlannerApi, PlannerError, PlannerResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "年假规划引擎";
