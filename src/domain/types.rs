// ==========================================
// 年假规划引擎 - 领域类型定义
// ==========================================
// 职责: 定义优化风格与外部输入类型
// 红线: 不含日历逻辑,不含引擎逻辑
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 优化风格 (Optimization Strategy)
// ==========================================
// 决定候选窗口长度范围与假期段最小间隔
// 序列化格式: camelCase (与调用方约定一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptimizationStrategy {
    Balanced,          // 均衡: 四种窗口混排
    LongWeekends,      // 长周末: 3-4天
    MiniBreaks,        // 小假期: 5-6天
    WeekLongBreaks,    // 整周假期: 7-9天
    ExtendedVacations, // 长假: 10-15天
}

impl OptimizationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationStrategy::Balanced => "balanced",
            OptimizationStrategy::LongWeekends => "longWeekends",
            OptimizationStrategy::MiniBreaks => "miniBreaks",
            OptimizationStrategy::WeekLongBreaks => "weekLongBreaks",
            OptimizationStrategy::ExtendedVacations => "extendedVacations",
        }
    }

    /// 从字符串解析优化风格
    ///
    /// 无法识别的输入回落为 Balanced
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "longWeekends" => OptimizationStrategy::LongWeekends,
            "miniBreaks" => OptimizationStrategy::MiniBreaks,
            "weekLongBreaks" => OptimizationStrategy::WeekLongBreaks,
            "extendedVacations" => OptimizationStrategy::ExtendedVacations,
            _ => OptimizationStrategy::Balanced, // 默认值
        }
    }
}

impl fmt::Display for OptimizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for OptimizationStrategy {
    fn default() -> Self {
        OptimizationStrategy::Balanced
    }
}

impl std::str::FromStr for OptimizationStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OptimizationStrategy::parse(s))
    }
}

// ==========================================
// 法定假日输入 (Holiday Input)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInput {
    /// 假日日期 (YYYY-MM-DD)
    pub date: NaiveDate,

    /// 假日名称
    pub name: String,
}

impl HolidayInput {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

// ==========================================
// 公司休息日规则 (Company Day Rule)
// ==========================================
// 两种形态: 单日指定 / 按星期周期性重复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyDayRule {
    /// 单日: 精确日期匹配
    Single { date: NaiveDate, name: String },

    /// 周期: 闭区间 [start_date, end_date] 内每个指定星期
    /// weekday 取值 0..=6, 周日=0
    Recurring {
        weekday: u8,
        start_date: NaiveDate,
        end_date: NaiveDate,
        name: String,
    },
}

impl CompanyDayRule {
    /// 判断规则是否命中指定日期
    ///
    /// 周期规则区间倒置 (start > end) 时不命中任何日期
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            CompanyDayRule::Single { date: d, .. } => *d == date,
            CompanyDayRule::Recurring {
                weekday,
                start_date,
                end_date,
                ..
            } => {
                *start_date <= date
                    && date <= *end_date
                    && date.weekday().num_days_from_sunday() == u32::from(*weekday)
            }
        }
    }

    /// 规则名称
    pub fn name(&self) -> &str {
        match self {
            CompanyDayRule::Single { name, .. } => name,
            CompanyDayRule::Recurring { name, .. } => name,
        }
    }
}
