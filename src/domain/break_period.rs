// ==========================================
// 年假规划引擎 - 假期段领域模型
// ==========================================
// 职责: 定义最终方案中的连续休息段及其分类计数
// 红线: 各假期段日期区间互不重叠
// ==========================================

use crate::domain::day::PlanDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// BreakPeriod - 假期段
// ==========================================
// 最终方案中一段连续的休息日
// 计数规则: 每天在每个类别上至多计 1 次,
// 周末叠加假日时两个类别各计 1 次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakPeriod {
    /// 起始日期
    pub start_date: NaiveDate,

    /// 结束日期
    pub end_date: NaiveDate,

    /// 段内日序列 (填充段只含新增的年假日)
    pub days: Vec<PlanDay>,

    // ===== 分类计数 =====
    pub total_days: usize,       // 段内总天数
    pub cto_days: usize,         // 年假日数
    pub public_holidays: usize,  // 法定假日数
    pub weekends: usize,         // 周末日数
    pub company_days_off: usize, // 公司休息日数
}

impl BreakPeriod {
    /// 从日序列构造假期段并推导计数
    ///
    /// 起止日期取序列首尾; 序列不可为空
    pub fn from_day_range(days: &[PlanDay]) -> Self {
        let mut period = Self {
            start_date: days[0].date,
            end_date: days[days.len() - 1].date,
            days: days.to_vec(),
            total_days: 0,
            cto_days: 0,
            public_holidays: 0,
            weekends: 0,
            company_days_off: 0,
        };
        period.recount();
        period
    }

    /// 按当前日序列重新推导分类计数
    pub fn recount(&mut self) {
        self.total_days = self.days.len();
        self.cto_days = self.days.iter().filter(|d| d.is_cto).count();
        self.public_holidays = self.days.iter().filter(|d| d.is_public_holiday).count();
        self.weekends = self.days.iter().filter(|d| d.is_weekend).count();
        self.company_days_off = self.days.iter().filter(|d| d.is_company_off).count();
    }

    /// 向后延伸一天 (强制延伸阶段使用)
    ///
    /// 调用方保证 day 为已标记 is_cto 的工作日且紧邻 end_date
    pub fn extend_with(&mut self, day: PlanDay) {
        self.end_date = day.date;
        self.days.push(day);
        self.total_days += 1;
        self.cto_days += 1;
    }

    /// 判断与另一假期段日期区间是否重叠
    pub fn overlaps(&self, other: &BreakPeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}
