// ==========================================
// 年假规划引擎 - 引擎编排器
// ==========================================
// 用途: 协调七个阶段的执行顺序
// 流程: 日历构建 → 候选生成 → 支配剪枝 → 区段搜索
//       → (强制延伸 → 强制填充) 循环 → 统计汇总
// ==========================================

use crate::config::strategy_profile::StrategyProfile;
use crate::domain::break_period::BreakPeriod;
use crate::domain::day::PlanDay;
use crate::domain::stats::PlanStats;
use crate::domain::types::{CompanyDayRule, HolidayInput, OptimizationStrategy};
use crate::engine::{
    BreakExtender, CalendarBuilder, CandidateGenerator, DominancePruner, QuotaFiller,
    SegmentSelector, StatsAssembler,
};
use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, info, instrument};

// ==========================================
// PlanRequest - 规划请求
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// 可用年假额度 (天)
    pub number_of_days: u32,

    /// 优化风格
    pub strategy: OptimizationStrategy,

    /// 目标年份 (缺省为当前年份)
    pub year: Option<i32>,

    /// 法定假日列表
    pub holidays: Vec<HolidayInput>,

    /// 公司休息日规则列表
    pub company_days_off: Vec<CompanyDayRule>,
}

// ==========================================
// PlanOutcome - 规划结果
// ==========================================
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// 标注后的完整日数组
    pub days: Vec<PlanDay>,

    /// 假期段列表 (按起始日期升序)
    pub breaks: Vec<BreakPeriod>,

    /// 整体统计
    pub stats: PlanStats,
}

// ==========================================
// PlanOrchestrator - 引擎编排器
// ==========================================
pub struct PlanOrchestrator {
    builder: CalendarBuilder,
    generator: CandidateGenerator,
    pruner: DominancePruner,
    selector: SegmentSelector,
    extender: BreakExtender,
    filler: QuotaFiller,
    assembler: StatsAssembler,
}

impl PlanOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            builder: CalendarBuilder::new(),
            generator: CandidateGenerator::new(),
            pruner: DominancePruner::new(),
            selector: SegmentSelector::new(),
            extender: BreakExtender::new(),
            filler: QuotaFiller::new(),
            assembler: StatsAssembler::new(),
        }
    }

    /// 以本地当前日期执行规划
    pub fn optimize(&self, request: &PlanRequest) -> PlanOutcome {
        self.optimize_at(request, Local::now().date_naive())
    }

    /// 以指定的当前日期执行规划
    ///
    /// 引擎容忍退化输入,总是返回结果:
    /// 额度为 0 时产出空方案; 额度超过可用工作日时
    /// 多余部分被静默丢弃
    #[instrument(skip(self, request), fields(
        strategy = %request.strategy,
        quota = request.number_of_days,
        year = request.year
    ))]
    pub fn optimize_at(&self, request: &PlanRequest, today: NaiveDate) -> PlanOutcome {
        let year = request.year.unwrap_or_else(|| today.year());
        let quota = request.number_of_days as usize;
        let profile = StrategyProfile::new(request.strategy);

        info!(year, quota, strategy = %request.strategy, "开始执行年假规划");

        // ==========================================
        // 阶段1: 日历构建
        // ==========================================
        let mut days =
            self.builder
                .build(year, today, &request.holidays, &request.company_days_off);

        // ==========================================
        // 阶段2: 候选生成
        // ==========================================
        let candidates = self.generator.generate_for_profile(&days, &profile);
        debug!(candidate_count = candidates.len(), "候选生成完成");

        // ==========================================
        // 阶段3: 支配剪枝
        // ==========================================
        let pruned = self.pruner.prune(candidates, quota);

        // ==========================================
        // 阶段4: 区段搜索
        // ==========================================
        let selection = self.selector.select(&pruned, quota, profile.spacing_days());

        // 把选中区段落到日历上并物化为假期段
        let mut breaks = Vec::with_capacity(selection.segments.len());
        for segment in &selection.segments {
            for day in days[segment.start_idx..=segment.end_idx].iter_mut() {
                day.in_break = true;
                if day.is_plain_workday() {
                    day.is_cto = true;
                }
            }
            breaks.push(BreakPeriod::from_day_range(
                &days[segment.start_idx..=segment.end_idx],
            ));
        }

        let mut remaining = quota.saturating_sub(selection.quota_spent);
        info!(
            chosen_segments = selection.segments.len(),
            quota_spent = selection.quota_spent,
            remaining,
            "区段搜索完成"
        );

        // ==========================================
        // 阶段5/6: 强制延伸与强制填充循环
        // ==========================================
        // 循环直到额度耗尽或一轮没有任何进展
        while remaining > 0 {
            let before = remaining;

            remaining = self.extender.extend(&mut days, &mut breaks, remaining);
            let (filler_breaks, after_fill) = self.filler.fill(&mut days, remaining);
            breaks.extend(filler_breaks);
            remaining = after_fill;

            if remaining == before {
                debug!(remaining, "剩余额度无处可用,放弃");
                break;
            }
        }

        // ==========================================
        // 阶段7: 统计汇总
        // ==========================================
        let stats = self.assembler.assemble(&mut breaks);

        info!(
            break_count = breaks.len(),
            total_days_off = stats.total_days_off,
            total_cto_days = stats.total_cto_days,
            "年假规划完成"
        );

        PlanOutcome { days, breaks, stats }
    }
}

impl Default for PlanOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
