// ==========================================
// 年假规划引擎 - 强制延伸引擎
// ==========================================
// 职责: 用剩余额度把已有假期段逐日向后延伸
// 输入: 日数组 + 假期段列表 + 剩余额度
// 输出: 延伸后的剩余额度 (日数组与假期段就地更新)
// ==========================================

use crate::domain::break_period::BreakPeriod;
use crate::domain::day::PlanDay;
use chrono::NaiveDate;
use tracing::{debug, instrument};

// ==========================================
// BreakExtender - 强制延伸引擎
// ==========================================
pub struct BreakExtender {
    // 无状态引擎
}

impl BreakExtender {
    pub fn new() -> Self {
        Self {}
    }

    /// 执行延伸
    ///
    /// 逐段按当前顺序处理: 从 end_date 向后逐日推进,
    /// 下一天既不在其他假期段内也非固定休息日时买下该天;
    /// 遇到固定休息日、已入段日或额度耗尽即停止该段延伸
    #[instrument(skip(self, days, breaks), fields(break_count = breaks.len()))]
    pub fn extend(
        &self,
        days: &mut [PlanDay],
        breaks: &mut [BreakPeriod],
        remaining_quota: usize,
    ) -> usize {
        let mut remaining = remaining_quota;

        for period in breaks.iter_mut() {
            if remaining == 0 {
                break;
            }

            let Some(end_idx) = day_index(days, period.end_date) else {
                continue;
            };

            let mut next = end_idx + 1;
            while remaining > 0 && next < days.len() {
                let day = &mut days[next];
                if day.in_break || day.is_fixed_off() {
                    break;
                }

                day.is_cto = true;
                day.in_break = true;
                period.extend_with(day.clone());
                remaining -= 1;
                next += 1;
            }
        }

        debug!(remaining, "强制延伸完成");
        remaining
    }
}

impl Default for BreakExtender {
    fn default() -> Self {
        Self::new()
    }
}

/// 日期在日数组中的下标 (日数组按天连续)
fn day_index(days: &[PlanDay], date: NaiveDate) -> Option<usize> {
    if days.is_empty() {
        return None;
    }
    let offset = (date - days[0].date).num_days();
    if offset < 0 || offset as usize >= days.len() {
        return None;
    }
    Some(offset as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_days(start: NaiveDate, count: usize) -> Vec<PlanDay> {
        (0..count)
            .map(|i| PlanDay::new(start + chrono::Duration::days(i as i64)))
            .collect()
    }

    fn mark_break(days: &mut [PlanDay], start: usize, end: usize) -> BreakPeriod {
        for day in days[start..=end].iter_mut() {
            day.in_break = true;
            if day.is_plain_workday() {
                day.is_cto = true;
            }
        }
        BreakPeriod::from_day_range(&days[start..=end])
    }

    #[test]
    fn test_extends_into_plain_workdays() {
        // 2025-07-07 周一起两周
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 14);
        let mut breaks = vec![mark_break(&mut days, 0, 1)]; // 周一 周二

        let remaining = BreakExtender::new().extend(&mut days, &mut breaks, 2);

        assert_eq!(remaining, 0);
        // 周三 周四被买下
        assert!(days[2].is_cto && days[2].in_break);
        assert!(days[3].is_cto && days[3].in_break);
        assert_eq!(breaks[0].end_date, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        assert_eq!(breaks[0].total_days, 4);
        assert_eq!(breaks[0].cto_days, 4);
    }

    #[test]
    fn test_stops_at_fixed_off_day() {
        // 2025-07-10 周四起: 周四 周五 周六...
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(), 7);
        let mut breaks = vec![mark_break(&mut days, 0, 0)]; // 周四

        let remaining = BreakExtender::new().extend(&mut days, &mut breaks, 5);

        // 只买下周五,周六是固定休息日即停
        assert_eq!(remaining, 4);
        assert!(days[1].is_cto);
        assert!(!days[2].is_cto && !days[2].in_break);
        assert_eq!(breaks[0].end_date, NaiveDate::from_ymd_opt(2025, 7, 11).unwrap());
    }

    #[test]
    fn test_stops_at_other_break() {
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 5);
        let first = mark_break(&mut days, 0, 0);
        let second = mark_break(&mut days, 1, 2);
        let mut breaks = vec![first, second];

        let remaining = BreakExtender::new().extend(&mut days, &mut breaks, 3);

        // 第一段的下一天已属第二段,不延伸;
        // 第二段向后买下周四 周五
        assert_eq!(remaining, 1);
        assert_eq!(breaks[0].total_days, 1);
        assert_eq!(breaks[1].end_date, NaiveDate::from_ymd_opt(2025, 7, 11).unwrap());
    }

    #[test]
    fn test_quota_exhaustion_stops_mid_walk() {
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 5);
        let mut breaks = vec![mark_break(&mut days, 0, 0)];

        let remaining = BreakExtender::new().extend(&mut days, &mut breaks, 1);

        assert_eq!(remaining, 0);
        assert!(days[1].is_cto);
        assert!(!days[2].is_cto);
    }

    #[test]
    fn test_zero_quota_is_noop() {
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 5);
        let mut breaks = vec![mark_break(&mut days, 0, 0)];

        let remaining = BreakExtender::new().extend(&mut days, &mut breaks, 0);

        assert_eq!(remaining, 0);
        assert_eq!(breaks[0].total_days, 1);
    }
}
