// ==========================================
// 年假规划引擎 - 引擎层
// ==========================================
// 职责: 实现规划流水线的七个阶段
// 红线: 引擎纯同步无 I/O, 单次调用内不保留状态
// ==========================================

pub mod break_extender;
pub mod calendar_builder;
pub mod candidate_generator;
pub mod dominance_pruner;
pub mod orchestrator;
pub mod quota_filler;
pub mod segment_selector;
pub mod statistics;

// 重导出核心引擎
pub use break_extender::BreakExtender;
pub use calendar_builder::CalendarBuilder;
pub use candidate_generator::CandidateGenerator;
pub use dominance_pruner::DominancePruner;
pub use orchestrator::{PlanOrchestrator, PlanOutcome, PlanRequest};
pub use quota_filler::QuotaFiller;
pub use segment_selector::{SegmentSelector, SelectionOutcome};
pub use statistics::StatsAssembler;
