// ==========================================
// 年假规划引擎 - 统计汇总领域模型
// ==========================================
// 职责: 定义从假期段汇总出的整体统计
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PlanStats - 方案统计
// ==========================================
// 六项计数全部由假期段计数求和得到
// 兼容约定: total_extended_weekends 与 total_cto_days 同值
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    /// 消耗的年假总天数
    pub total_cto_days: usize,

    /// 假期段内法定假日总数
    pub total_public_holidays: usize,

    /// 假期段内周末日总数
    pub total_normal_weekends: usize,

    /// 历史字段,与 total_cto_days 同值 (保持输出兼容)
    pub total_extended_weekends: usize,

    /// 假期段内公司休息日总数
    pub total_company_days_off: usize,

    /// 假期段总天数
    pub total_days_off: usize,
}
