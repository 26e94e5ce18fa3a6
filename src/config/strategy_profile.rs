// ==========================================
// 年假规划引擎 - 策略参数表
// ==========================================
// 职责: 把优化风格映射为候选窗口长度范围与最小间隔
// 用途: 候选生成与记忆化搜索共用同一份参数来源
// ==========================================

use crate::domain::types::OptimizationStrategy;
use serde::{Deserialize, Serialize};

// 各风格的候选窗口长度范围 (闭区间)
const LONG_WEEKEND_WINDOWS: &[(usize, usize)] = &[(3, 4)];
const MINI_BREAK_WINDOWS: &[(usize, usize)] = &[(5, 6)];
const WEEK_LONG_WINDOWS: &[(usize, usize)] = &[(7, 9)];
const EXTENDED_WINDOWS: &[(usize, usize)] = &[(10, 15)];
const BALANCED_WINDOWS: &[(usize, usize)] = &[(3, 4), (5, 6), (7, 9), (10, 15)];

/// 策略参数表
///
/// 由优化风格构造,无 I/O,无可变状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyProfile {
    strategy: OptimizationStrategy,
}

impl StrategyProfile {
    pub fn new(strategy: OptimizationStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> OptimizationStrategy {
        self.strategy
    }

    /// 候选窗口长度范围列表 (min_len, max_len)
    ///
    /// Balanced 返回四种范围的并集,候选按范围顺序拼接
    pub fn window_ranges(&self) -> &'static [(usize, usize)] {
        match self.strategy {
            OptimizationStrategy::LongWeekends => LONG_WEEKEND_WINDOWS,
            OptimizationStrategy::MiniBreaks => MINI_BREAK_WINDOWS,
            OptimizationStrategy::WeekLongBreaks => WEEK_LONG_WINDOWS,
            OptimizationStrategy::ExtendedVacations => EXTENDED_WINDOWS,
            OptimizationStrategy::Balanced => BALANCED_WINDOWS,
        }
    }

    /// 相邻假期段最小间隔 (天)
    ///
    /// 约束: 后一段 start_idx >= 前一段 end_idx + spacing
    pub fn spacing_days(&self) -> usize {
        match self.strategy {
            OptimizationStrategy::LongWeekends => 7,
            OptimizationStrategy::MiniBreaks => 14,
            OptimizationStrategy::WeekLongBreaks => 21,
            OptimizationStrategy::ExtendedVacations => 30,
            OptimizationStrategy::Balanced => 21,
        }
    }
}

impl Default for StrategyProfile {
    fn default() -> Self {
        Self::new(OptimizationStrategy::default())
    }
}
