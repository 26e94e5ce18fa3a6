// ==========================================
// 年假规划引擎 - 候选区段领域模型
// ==========================================
// 职责: 定义搜索阶段使用的连续窗口及其代价评估
// 红线: cto_used >= 1, 否则窗口不构成候选
// ==========================================

use crate::domain::day::PlanDay;
use serde::{Deserialize, Serialize};

// ==========================================
// CandidateSegment - 候选区段
// ==========================================
// 提交给记忆化搜索的连续日期窗口
// 索引为日数组下标,闭区间 [start_idx, end_idx]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSegment {
    /// 起始下标 (含)
    pub start_idx: usize,

    /// 结束下标 (含)
    pub end_idx: usize,

    /// 窗口总天数 = end_idx - start_idx + 1
    pub total_days: usize,

    /// 需要消耗的年假天数 (窗口内非固定休息日数)
    pub cto_used: usize,

    /// 性价比 = total_days / cto_used (仅用于展示)
    pub efficiency: f64,
}

impl CandidateSegment {
    /// 从日数组窗口构造候选区段
    ///
    /// # 参数
    /// - `days`: 完整日数组
    /// - `start_idx` / `end_idx`: 窗口闭区间下标
    ///
    /// # 返回
    /// 窗口内不含任何工作日时返回 None (不构成候选)
    pub fn from_window(days: &[PlanDay], start_idx: usize, end_idx: usize) -> Option<Self> {
        let cto_used = days[start_idx..=end_idx]
            .iter()
            .filter(|d| d.is_plain_workday())
            .count();
        if cto_used == 0 {
            return None;
        }

        let total_days = end_idx - start_idx + 1;
        Some(Self {
            start_idx,
            end_idx,
            total_days,
            cto_used,
            efficiency: total_days as f64 / cto_used as f64,
        })
    }

    /// 判断与另一候选区段是否日期重叠
    pub fn overlaps(&self, other: &CandidateSegment) -> bool {
        self.start_idx <= other.end_idx && other.start_idx <= self.end_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_days(start: NaiveDate, count: usize) -> Vec<PlanDay> {
        (0..count)
            .map(|i| PlanDay::new(start + chrono::Duration::days(i as i64)))
            .collect()
    }

    #[test]
    fn test_from_window_counts_workdays() {
        // 2025-07-03 周四起 4 天: 周四 周五 周六 周日
        let days = make_days(NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(), 4);
        let seg = CandidateSegment::from_window(&days, 0, 3).unwrap();

        assert_eq!(seg.total_days, 4);
        assert_eq!(seg.cto_used, 2); // 周四 + 周五
        assert!((seg.efficiency - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_window_all_fixed_off_is_none() {
        // 2025-07-05 周六起 2 天: 纯周末窗口不构成候选
        let days = make_days(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(), 2);
        assert!(CandidateSegment::from_window(&days, 0, 1).is_none());
    }

    #[test]
    fn test_overlaps() {
        let days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 14);
        let a = CandidateSegment::from_window(&days, 0, 3).unwrap();
        let b = CandidateSegment::from_window(&days, 3, 7).unwrap();
        let c = CandidateSegment::from_window(&days, 8, 11).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
