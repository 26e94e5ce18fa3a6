// ==========================================
// 年假规划引擎 - 日历构建引擎
// ==========================================
// 职责: 把目标年份物化为带休息标志的有序日数组
// 输入: 目标年份 + 法定假日 + 公司休息日规则 + 当前日期
// 输出: [start_date, 12-31] 闭区间内的 PlanDay 数组
// ==========================================

use crate::domain::day::PlanDay;
use crate::domain::types::{CompanyDayRule, HolidayInput};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, instrument};

// ==========================================
// CalendarBuilder - 日历构建引擎
// ==========================================
pub struct CalendarBuilder {
    // 无状态引擎
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self {}
    }

    /// 构建规划窗口日历
    ///
    /// 起点规则: 目标年份等于当前年份时从 today 开始,
    /// 否则从 1 月 1 日开始; 终点恒为 12 月 31 日
    ///
    /// # 参数
    /// - `year`: 目标年份
    /// - `today`: 当前日期 (决定当年规划的起点)
    /// - `holidays`: 法定假日列表 (重复日期首个命中生效)
    /// - `company_rules`: 公司休息日规则列表 (首个命中生效)
    #[instrument(skip(self, holidays, company_rules), fields(
        holiday_count = holidays.len(),
        rule_count = company_rules.len()
    ))]
    pub fn build(
        &self,
        year: i32,
        today: NaiveDate,
        holidays: &[HolidayInput],
        company_rules: &[CompanyDayRule],
    ) -> Vec<PlanDay> {
        let start = if year == today.year() {
            today
        } else {
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today)
        };
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(start);

        let mut days = Vec::with_capacity(366);
        let mut date = start;
        while date <= end {
            let mut day = PlanDay::new(date);

            // 法定假日: 精确日期匹配,首个命中生效
            if let Some(holiday) = holidays.iter().find(|h| h.date == date) {
                day.is_public_holiday = true;
                day.holiday_name = Some(holiday.name.clone());
            }

            // 公司休息日: 单日精确匹配或周期规则命中,首个命中生效
            if let Some(rule) = company_rules.iter().find(|r| r.matches(date)) {
                day.is_company_off = true;
                day.company_name = Some(rule.name().to_string());
            }

            days.push(day);
            date = date + chrono::Duration::days(1);
        }

        debug!(day_count = days.len(), start = %start, end = %end, "日历构建完成");
        days
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
