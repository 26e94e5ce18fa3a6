// ==========================================
// 年假规划引擎 - 统计汇总引擎
// ==========================================
// 职责: 排序假期段并汇总整体统计
// 输入: 假期段列表 (可能乱序)
// 输出: 按起始日期升序的段列表 + PlanStats
// ==========================================

use crate::domain::break_period::BreakPeriod;
use crate::domain::stats::PlanStats;
use tracing::{debug, instrument};

// ==========================================
// StatsAssembler - 统计汇总引擎
// ==========================================
pub struct StatsAssembler {
    // 无状态引擎
}

impl StatsAssembler {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总统计
    ///
    /// 先把假期段按 start_date 升序排序 (就地),
    /// 再把各段计数求和
    #[instrument(skip(self, breaks), fields(break_count = breaks.len()))]
    pub fn assemble(&self, breaks: &mut [BreakPeriod]) -> PlanStats {
        breaks.sort_by_key(|b| b.start_date);

        let mut stats = PlanStats::default();
        for period in breaks.iter() {
            stats.total_cto_days += period.cto_days;
            stats.total_public_holidays += period.public_holidays;
            stats.total_normal_weekends += period.weekends;
            stats.total_company_days_off += period.company_days_off;
            stats.total_days_off += period.total_days;
        }
        // 历史口径: 与 total_cto_days 同值
        stats.total_extended_weekends = stats.total_cto_days;

        debug!(
            total_days_off = stats.total_days_off,
            total_cto_days = stats.total_cto_days,
            "统计汇总完成"
        );
        stats
    }
}

impl Default for StatsAssembler {
    fn default() -> Self {
        Self::new()
    }
}
