// ==========================================
// 年假规划引擎 - 规划接口
// ==========================================
// 职责: 面向调用方的字符串化入口
// 流程: DTO 校验 → 引擎编排 → DTO 输出
// ==========================================

use crate::api::dto::{OptimizeRequestDto, OptimizeResponseDto};
use crate::api::error::PlannerResult;
use crate::engine::orchestrator::PlanOrchestrator;
use chrono::NaiveDate;
use tracing::instrument;

// ==========================================
// PlannerApi - 规划接口
// ==========================================
pub struct PlannerApi {
    orchestrator: PlanOrchestrator,
}

impl PlannerApi {
    pub fn new() -> Self {
        Self {
            orchestrator: PlanOrchestrator::new(),
        }
    }

    /// 执行规划 (以本地当前日期为基准)
    ///
    /// 入参校验失败返回错误; 校验通过后引擎永不失败
    #[instrument(skip(self, request), fields(quota = request.number_of_days))]
    pub fn optimize(&self, request: &OptimizeRequestDto) -> PlannerResult<OptimizeResponseDto> {
        let plan_request = request.to_plan_request()?;
        Ok(OptimizeResponseDto::from(
            self.orchestrator.optimize(&plan_request),
        ))
    }

    /// 执行规划 (以指定日期为基准, 便于可重复验证)
    pub fn optimize_at(
        &self,
        request: &OptimizeRequestDto,
        today: NaiveDate,
    ) -> PlannerResult<OptimizeResponseDto> {
        let plan_request = request.to_plan_request()?;
        Ok(OptimizeResponseDto::from(
            self.orchestrator.optimize_at(&plan_request, today),
        ))
    }
}

impl Default for PlannerApi {
    fn default() -> Self {
        Self::new()
    }
}
