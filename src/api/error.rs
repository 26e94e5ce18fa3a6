// ==========================================
// 年假规划引擎 - API层错误类型
// ==========================================
// 职责: 定义 DTO 边界的校验错误
// 引擎本体容忍退化输入,永不失败;
// 唯一可失败面是字符串入参的解析
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum PlannerError {
    /// 日期字符串不符合 YYYY-MM-DD
    #[error("无效日期: {field}={value}")]
    InvalidDate { field: &'static str, value: String },

    /// 星期序号越界 (应为 0..=6, 周日=0)
    #[error("无效星期序号: {0} (应为 0..=6, 周日=0)")]
    InvalidWeekday(u8),

    /// 规则缺少必填字段
    #[error("缺少字段: {0}")]
    MissingField(&'static str),
}

/// Result 类型别名
pub type PlannerResult<T> = Result<T, PlannerError>;
