// ==========================================
// 年假规划引擎 - 强制填充引擎
// ==========================================
// 职责: 把仍未用完的额度转化为额外的假期段
// 输入: 日数组 + 剩余额度
// 输出: 新增填充段列表 + 剩余额度
// ==========================================

use crate::domain::break_period::BreakPeriod;
use crate::domain::day::PlanDay;
use tracing::{debug, instrument};

// ==========================================
// QuotaFiller - 强制填充引擎
// ==========================================
// 填充段的日序列只含新买下的年假日;
// 途中跨过的固定休息日落在起止区间内但不入列
pub struct QuotaFiller {
    // 无状态引擎
}

impl QuotaFiller {
    pub fn new() -> Self {
        Self {}
    }

    /// 执行填充
    ///
    /// 从左到右扫描, 对每个含工作日的未入段连续区间:
    /// 买下区间内每个工作日 (固定休息日原地跳过,不耗额度),
    /// 直到区间结束或额度耗尽; 新买下的日构成一个填充段
    #[instrument(skip(self, days), fields(day_count = days.len()))]
    pub fn fill(
        &self,
        days: &mut [PlanDay],
        remaining_quota: usize,
    ) -> (Vec<BreakPeriod>, usize) {
        let mut remaining = remaining_quota;
        let mut filler_breaks = Vec::new();

        let mut i = 0;
        while i < days.len() && remaining > 0 {
            if days[i].in_break {
                i += 1;
                continue;
            }

            // 定位连续的未入段区间 [i, run_end)
            let mut run_end = i;
            while run_end < days.len() && !days[run_end].in_break {
                run_end += 1;
            }

            // 不含工作日的区间跳过
            if days[i..run_end].iter().all(|d| d.is_fixed_off()) {
                i = run_end;
                continue;
            }

            // 买下区间内的工作日
            let mut added = Vec::new();
            for k in i..run_end {
                if remaining == 0 {
                    break;
                }
                if days[k].is_fixed_off() {
                    continue;
                }
                days[k].is_cto = true;
                days[k].in_break = true;
                added.push(days[k].clone());
                remaining -= 1;
            }

            if !added.is_empty() {
                filler_breaks.push(BreakPeriod::from_day_range(&added));
            }

            i = run_end;
        }

        debug!(
            filler_count = filler_breaks.len(),
            remaining,
            "强制填充完成"
        );
        (filler_breaks, remaining)
    }
}

impl Default for QuotaFiller {
    fn default() -> Self {
        Self::new()
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
    fn test_fill_converts_workdays_only() {
        // 2025-07-07 周一起 7 天 (含周末)
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 7);

        let (breaks, remaining) = QuotaFiller::new().fill(&mut days, 10);

        assert_eq!(remaining, 5); // 5 个工作日被买下
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].cto_days, 5);
        assert_eq!(breaks[0].total_days, 5);
        // 周末不消耗额度也不入段
        assert!(!days[5].is_cto && !days[5].in_break);
        assert!(!days[6].is_cto && !days[6].in_break);
    }

    #[test]
    fn test_filler_break_spans_but_omits_fixed_off_days() {
        // 周五起 4 天: 周五 周六 周日 周一
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 11).unwrap(), 4);

        let (breaks, remaining) = QuotaFiller::new().fill(&mut days, 10);

        assert_eq!(remaining, 8);
        assert_eq!(breaks.len(), 1);
        let filler = &breaks[0];
        // 起止区间跨过周末
        assert_eq!(filler.start_date, NaiveDate::from_ymd_opt(2025, 7, 11).unwrap());
        assert_eq!(filler.end_date, NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
        // 日序列只含买下的两个工作日
        assert_eq!(filler.days.len(), 2);
        assert!(filler.days.iter().all(|d| d.is_cto));
        // 分类计数: 填充段只计年假
        assert_eq!(filler.cto_days, 2);
        assert_eq!(filler.total_days, 2);
        assert_eq!(filler.weekends, 0);
        assert_eq!(filler.public_holidays, 0);
        assert_eq!(filler.company_days_off, 0);
    }

    #[test]
    fn test_existing_breaks_split_runs() {
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 5);
        // 周三已在某假期段内
        days[2].in_break = true;
        days[2].is_cto = true;

        let (breaks, remaining) = QuotaFiller::new().fill(&mut days, 10);

        // 两个区间各成一段
        assert_eq!(breaks.len(), 2);
        assert_eq!(remaining, 6);
        assert_eq!(breaks[0].cto_days, 2);
        assert_eq!(breaks[1].cto_days, 2);
    }

    #[test]
    fn test_quota_exhausts_mid_run() {
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 5);

        let (breaks, remaining) = QuotaFiller::new().fill(&mut days, 2);

        assert_eq!(remaining, 0);
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].cto_days, 2);
        // 额度耗尽后剩余工作日保持原样
        assert!(!days[2].is_cto);
        assert!(!days[3].is_cto);
    }

    #[test]
    fn test_pure_weekend_run_is_skipped() {
        // 周六起 2 天
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 12).unwrap(), 2);

        let (breaks, remaining) = QuotaFiller::new().fill(&mut days, 5);

        assert!(breaks.is_empty());
        assert_eq!(remaining, 5);
    }

    #[test]
    fn test_zero_quota_is_noop() {
        let mut days = make_days(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(), 5);

        let (breaks, remaining) = QuotaFiller::new().fill(&mut days, 0);

        assert!(breaks.is_empty());
        assert_eq!(remaining, 0);
        assert!(days.iter().all(|d| !d.is_cto));
    }
}
