// ==========================================
// 年假规划引擎 - 规划日领域模型
// ==========================================
// 职责: 定义规划窗口内的单日记录及其休息属性
// 红线: is_cto 只能落在非固定休息日上
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

// ==========================================
// PlanDay - 规划日
// ==========================================
// 规划窗口内的一天,携带全部休息标志
// is_cto / in_break 由引擎按 C1→C7 顺序写入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    /// 日期 (YYYY-MM-DD)
    pub date: NaiveDate,

    /// 是否周末 (周六/周日)
    pub is_weekend: bool,

    /// 是否法定假日
    pub is_public_holiday: bool,

    /// 法定假日名称 (首个命中的假日)
    pub holiday_name: Option<String>,

    /// 是否公司休息日
    pub is_company_off: bool,

    /// 公司休息日名称 (首个命中的规则)
    pub company_name: Option<String>,

    /// 是否消耗年假额度 (引擎写入)
    pub is_cto: bool,

    /// 是否属于某个假期段 (引擎写入)
    pub in_break: bool,
}

impl PlanDay {
    /// 创建新的规划日
    ///
    /// 周末标志由日期的星期推导,其余标志初始为 false
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            is_public_holiday: false,
            holiday_name: None,
            is_company_off: false,
            company_name: None,
            is_cto: false,
            in_break: false,
        }
    }

    /// 是否固定休息日 (周末/法定假日/公司休息日)
    ///
    /// 固定休息日不消耗年假额度
    pub fn is_fixed_off(&self) -> bool {
        self.is_weekend || self.is_public_holiday || self.is_company_off
    }

    /// 是否普通工作日 (可被年假额度买下)
    pub fn is_plain_workday(&self) -> bool {
        !self.is_fixed_off()
    }
}

impl std::fmt::Display for PlanDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_weekend_flag() {
        // 2025-07-05 是周六
        let sat = PlanDay::new(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap());
        assert!(sat.is_weekend);
        assert!(sat.is_fixed_off());

        // 2025-07-07 是周一
        let mon = PlanDay::new(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap());
        assert!(!mon.is_weekend);
        assert!(mon.is_plain_workday());
    }

    #[test]
    fn test_fixed_off_covers_all_sources() {
        let mut day = PlanDay::new(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap());
        assert!(!day.is_fixed_off());

        day.is_public_holiday = true;
        assert!(day.is_fixed_off());

        day.is_public_holiday = false;
        day.is_company_off = true;
        assert!(day.is_fixed_off());
    }

    #[test]
    fn test_holiday_on_weekend_keeps_both_flags() {
        // 周末与法定假日叠加时两个标志同时成立
        let mut day = PlanDay::new(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap());
        day.is_public_holiday = true;
        day.holiday_name = Some("独立日补休".to_string());

        assert!(day.is_weekend);
        assert!(day.is_public_holiday);
        assert!(day.is_fixed_off());
    }
}
