// ==========================================
// 年假规划引擎 - 区段选择引擎 (记忆化搜索)
// ==========================================
// 职责: 在互不重叠且满足间隔约束的前提下,
//       选出总休息天数最大的候选子集
// 输入: 按 start_idx 升序的剪枝后候选 + 额度 + 间隔
// 输出: 选中区段序列与消耗额度
// ==========================================

use crate::domain::segment::CandidateSegment;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, instrument};

// 记忆化键: (列表下标, 上一段终点, 已用额度)
type MemoKey = (u16, i16, u16);

// ==========================================
// SelectionOutcome - 搜索结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SelectionOutcome {
    /// 选中区段的总休息天数
    pub total_days_off: usize,

    /// 选中的区段 (按选取顺序,即起点升序)
    pub segments: Vec<CandidateSegment>,

    /// 消耗的年假额度
    pub quota_spent: usize,
}

// ==========================================
// SegmentSelector - 区段选择引擎
// ==========================================
pub struct SegmentSelector {
    // 无状态引擎,记忆化表仅存在于单次调用内
}

impl SegmentSelector {
    pub fn new() -> Self {
        Self {}
    }

    /// 执行搜索
    ///
    /// 约束:
    /// - 后一段 start_idx >= 前一段 end_idx + spacing
    /// - 累计 cto_used <= quota
    /// 并列时保留先遍历到的方案 (起点更早者),保证输出确定
    #[instrument(skip(self, candidates), fields(candidate_count = candidates.len()))]
    pub fn select(
        &self,
        candidates: &[CandidateSegment],
        quota: usize,
        spacing: usize,
    ) -> SelectionOutcome {
        // 额度不低于任何可行链的总代价时约束必然不触发,
        // 此时 used 不影响子问题结果,键中以 0 归并共享条目
        let quota_binding = quota < Self::max_chain_spend(candidates, spacing);

        let mut memo: HashMap<MemoKey, Rc<SelectionOutcome>> = HashMap::new();
        let outcome = self.search(
            candidates,
            0,
            -1,
            0,
            quota,
            spacing,
            quota_binding,
            &mut memo,
        );

        debug!(
            chosen_count = outcome.segments.len(),
            total_days_off = outcome.total_days_off,
            quota_spent = outcome.quota_spent,
            memo_entries = memo.len(),
            "区段搜索完成"
        );
        (*outcome).clone()
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        candidates: &[CandidateSegment],
        idx: usize,
        last_end: isize,
        used: usize,
        quota: usize,
        spacing: usize,
        quota_binding: bool,
        memo: &mut HashMap<MemoKey, Rc<SelectionOutcome>>,
    ) -> Rc<SelectionOutcome> {
        if idx >= candidates.len() {
            return Rc::new(SelectionOutcome::default());
        }

        let key_used = if quota_binding { used as u16 } else { 0 };
        let key: MemoKey = (idx as u16, last_end as i16, key_used);
        if let Some(hit) = memo.get(&key) {
            return Rc::clone(hit);
        }

        // 初始状态 (last_end = -1) 不施加间隔约束
        let required_start = if last_end < 0 {
            0
        } else {
            last_end as usize + spacing
        };

        let from = Self::lower_bound(candidates, idx, required_start);

        let mut best = Rc::new(SelectionOutcome::default());
        for i in from..candidates.len() {
            let candidate = &candidates[i];
            if candidate.start_idx < required_start {
                continue;
            }
            if used + candidate.cto_used > quota {
                continue;
            }

            let sub = self.search(
                candidates,
                i + 1,
                candidate.end_idx as isize,
                used + candidate.cto_used,
                quota,
                spacing,
                quota_binding,
                memo,
            );

            let total = candidate.total_days + sub.total_days_off;
            // 严格大于: 并列时先遍历到的方案胜出
            if total > best.total_days_off {
                let mut segments = Vec::with_capacity(1 + sub.segments.len());
                segments.push(candidate.clone());
                segments.extend(sub.segments.iter().cloned());
                best = Rc::new(SelectionOutcome {
                    total_days_off: total,
                    segments,
                    quota_spent: candidate.cto_used + sub.quota_spent,
                });
            }
        }

        memo.insert(key, Rc::clone(&best));
        best
    }

    /// 二分下界: candidates[from..] 中首个 start_idx >= required_start 的位置
    fn lower_bound(
        candidates: &[CandidateSegment],
        from: usize,
        required_start: usize,
    ) -> usize {
        from + candidates[from..].partition_point(|c| c.start_idx < required_start)
    }

    /// 无额度约束下任何可行链的最大总代价
    ///
    /// 自尾向前: 每个位置取 "跳过" 与 "选取后接续" 的较大者
    fn max_chain_spend(candidates: &[CandidateSegment], spacing: usize) -> usize {
        let mut best = vec![0usize; candidates.len() + 1];
        for j in (0..candidates.len()).rev() {
            let next = Self::lower_bound(candidates, j + 1, candidates[j].end_idx + spacing);
            best[j] = best[j + 1].max(candidates[j].cto_used + best[next]);
        }
        best.first().copied().unwrap_or(0)
    }
}

impl Default for SegmentSelector {
    fn default() -> Self {
        Self::new()
    }
}
