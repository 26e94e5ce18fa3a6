// ==========================================
// 年假规划引擎 - 候选生成引擎
// ==========================================
// 职责: 枚举所有允许长度的连续窗口并评估代价
// 输入: 日数组 + 窗口长度范围
// 输出: cto_used >= 1 的候选区段列表
// ==========================================

use crate::config::strategy_profile::StrategyProfile;
use crate::domain::day::PlanDay;
use crate::domain::segment::CandidateSegment;
use tracing::{debug, instrument};

// ==========================================
// CandidateGenerator - 候选生成引擎
// ==========================================
pub struct CandidateGenerator {
    // 无状态引擎
}

impl CandidateGenerator {
    pub fn new() -> Self {
        Self {}
    }

    /// 枚举单一长度范围内的全部候选
    ///
    /// 对每个长度 L in [min_len, max_len] 和每个起点 i,
    /// 当 i + L - 1 在界内且窗口含工作日时产出候选
    ///
    /// # 参数
    /// - `days`: 日数组
    /// - `min_len` / `max_len`: 窗口长度闭区间, 1 <= min <= max
    #[instrument(skip(self, days), fields(day_count = days.len()))]
    pub fn generate(
        &self,
        days: &[PlanDay],
        min_len: usize,
        max_len: usize,
    ) -> Vec<CandidateSegment> {
        let mut candidates = Vec::new();
        for len in min_len..=max_len {
            if len > days.len() {
                break;
            }
            for start_idx in 0..=(days.len() - len) {
                let end_idx = start_idx + len - 1;
                if let Some(segment) = CandidateSegment::from_window(days, start_idx, end_idx) {
                    candidates.push(segment);
                }
            }
        }

        debug!(candidate_count = candidates.len(), "候选窗口枚举完成");
        candidates
    }

    /// 按策略参数表枚举候选
    ///
    /// Balanced 会对每个长度范围各跑一遍并按顺序拼接
    pub fn generate_for_profile(
        &self,
        days: &[PlanDay],
        profile: &StrategyProfile,
    ) -> Vec<CandidateSegment> {
        let mut candidates = Vec::new();
        for &(min_len, max_len) in profile.window_ranges() {
            candidates.extend(self.generate(days, min_len, max_len));
        }
        candidates
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new()
    }
}
