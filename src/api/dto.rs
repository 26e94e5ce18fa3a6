// ==========================================
// 年假规划引擎 - API层数据传输对象
// ==========================================
// 职责: 定义 JSON 请求/响应结构并转换为领域类型
// 日期格式: YYYY-MM-DD, 本地日历口径, 无时区
// ==========================================

use crate::api::error::{PlannerError, PlannerResult};
use crate::domain::break_period::BreakPeriod;
use crate::domain::day::PlanDay;
use crate::domain::stats::PlanStats;
use crate::domain::types::{CompanyDayRule, HolidayInput, OptimizationStrategy};
use crate::engine::orchestrator::{PlanOutcome, PlanRequest};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 解析 YYYY-MM-DD 日期串
fn parse_date(field: &'static str, value: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| PlannerError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

// ==========================================
// 请求 DTO
// ==========================================

/// 法定假日条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayDto {
    pub date: String,
    pub name: String,
}

/// 公司休息日条目
///
/// is_recurring=false 时取 date;
/// is_recurring=true 时取 weekday/start_date/end_date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDayOffDto {
    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub weekday: Option<u8>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    pub name: String,
}

/// 规划请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequestDto {
    /// 可用年假额度 (天)
    pub number_of_days: u32,

    /// 优化风格 (未知值回落为 balanced)
    #[serde(default)]
    pub strategy: Option<String>,

    /// 目标年份 (缺省为当前年份)
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub holidays: Vec<HolidayDto>,

    #[serde(default)]
    pub company_days_off: Vec<CompanyDayOffDto>,
}

impl OptimizeRequestDto {
    /// 转换为领域请求
    ///
    /// 日期串与星期序号在此校验; 风格解析永不失败
    pub fn to_plan_request(&self) -> PlannerResult<PlanRequest> {
        let strategy = OptimizationStrategy::parse(self.strategy.as_deref().unwrap_or(""));

        let mut holidays = Vec::with_capacity(self.holidays.len());
        for h in &self.holidays {
            holidays.push(HolidayInput::new(parse_date("date", &h.date)?, h.name.clone()));
        }

        let mut company_days_off = Vec::with_capacity(self.company_days_off.len());
        for c in &self.company_days_off {
            company_days_off.push(c.to_rule()?);
        }

        Ok(PlanRequest {
            number_of_days: self.number_of_days,
            strategy,
            year: self.year,
            holidays,
            company_days_off,
        })
    }
}

impl CompanyDayOffDto {
    fn to_rule(&self) -> PlannerResult<CompanyDayRule> {
        if self.is_recurring {
            let weekday = self.weekday.ok_or(PlannerError::MissingField("weekday"))?;
            if weekday > 6 {
                return Err(PlannerError::InvalidWeekday(weekday));
            }
            let start = self
                .start_date
                .as_deref()
                .ok_or(PlannerError::MissingField("start_date"))?;
            let end = self
                .end_date
                .as_deref()
                .ok_or(PlannerError::MissingField("end_date"))?;
            Ok(CompanyDayRule::Recurring {
                weekday,
                start_date: parse_date("start_date", start)?,
                end_date: parse_date("end_date", end)?,
                name: self.name.clone(),
            })
        } else {
            let date = self.date.as_deref().ok_or(PlannerError::MissingField("date"))?;
            Ok(CompanyDayRule::Single {
                date: parse_date("date", date)?,
                name: self.name.clone(),
            })
        }
    }
}

// ==========================================
// 响应 DTO
// ==========================================

/// 规划响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponseDto {
    /// 标注后的完整日数组
    pub days: Vec<PlanDay>,

    /// 假期段列表 (按起始日期升序)
    pub breaks: Vec<BreakPeriod>,

    /// 整体统计
    pub stats: PlanStats,
}

impl From<PlanOutcome> for OptimizeResponseDto {
    fn from(outcome: PlanOutcome) -> Self {
        Self {
            days: outcome.days,
            breaks: outcome.breaks,
            stats: outcome.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_holidays_and_rules() {
        let dto = OptimizeRequestDto {
            number_of_days: 5,
            strategy: Some("longWeekends".to_string()),
            year: Some(2025),
            holidays: vec![HolidayDto {
                date: "2025-07-04".to_string(),
                name: "独立日".to_string(),
            }],
            company_days_off: vec![CompanyDayOffDto {
                is_recurring: true,
                date: None,
                weekday: Some(5),
                start_date: Some("2025-07-01".to_string()),
                end_date: Some("2025-07-31".to_string()),
                name: "夏季周五".to_string(),
            }],
        };

        let request = dto.to_plan_request().unwrap();

        assert_eq!(request.strategy, OptimizationStrategy::LongWeekends);
        assert_eq!(request.holidays.len(), 1);
        assert_eq!(
            request.holidays[0].date,
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
        );
        assert!(matches!(
            request.company_days_off[0],
            CompanyDayRule::Recurring { weekday: 5, .. }
        ));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let dto = OptimizeRequestDto {
            number_of_days: 5,
            strategy: None,
            year: None,
            holidays: vec![HolidayDto {
                date: "07/04/2025".to_string(),
                name: "格式错误".to_string(),
            }],
            company_days_off: vec![],
        };

        assert!(matches!(
            dto.to_plan_request(),
            Err(PlannerError::InvalidDate { field: "date", .. })
        ));
    }

    #[test]
    fn test_weekday_out_of_range_is_rejected() {
        let dto = CompanyDayOffDto {
            is_recurring: true,
            date: None,
            weekday: Some(7),
            start_date: Some("2025-01-01".to_string()),
            end_date: Some("2025-12-31".to_string()),
            name: "越界".to_string(),
        };

        assert!(matches!(dto.to_rule(), Err(PlannerError::InvalidWeekday(7))));
    }

    #[test]
    fn test_missing_strategy_defaults_to_balanced() {
        let dto = OptimizeRequestDto {
            number_of_days: 0,
            strategy: None,
            year: None,
            holidays: vec![],
            company_days_off: vec![],
        };

        let request = dto.to_plan_request().unwrap();
        assert_eq!(request.strategy, OptimizationStrategy::Balanced);
    }

    #[test]
    fn test_single_rule_requires_date() {
        let dto = CompanyDayOffDto {
            is_recurring: false,
            date: None,
            weekday: None,
            start_date: None,
            end_date: None,
            name: "缺日期".to_string(),
        };

        assert!(matches!(dto.to_rule(), Err(PlannerError::MissingField("date"))));
    }
}
