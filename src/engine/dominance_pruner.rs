// ==========================================
// 年假规划引擎 - 支配剪枝引擎
// ==========================================
// 职责: 删除同起点下被其他候选弱支配的区段
// 输入: 候选列表 + 可用年假额度
// 输出: 每个起点只保留 (代价, 跨度, 终点) 帕累托前沿
// ==========================================

use crate::domain::segment::CandidateSegment;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

// ==========================================
// DominancePruner - 支配剪枝引擎
// ==========================================
pub struct DominancePruner {
    // 无状态引擎
}

impl DominancePruner {
    pub fn new() -> Self {
        Self {}
    }

    /// 执行剪枝
    ///
    /// 规则:
    /// 1) 丢弃 cto_used > quota 的候选
    /// 2) 按 start_idx 分组
    /// 3) 组内 B 弱支配 A (end 不早, 代价不高, 跨度不短) 时丢弃 A;
    ///    互相弱支配的并列候选保留先出现者,绝不同时丢弃
    /// 4) 幸存者按 start_idx 升序稳定排序
    #[instrument(skip(self, candidates), fields(candidate_count = candidates.len()))]
    pub fn prune(
        &self,
        candidates: Vec<CandidateSegment>,
        quota: usize,
    ) -> Vec<CandidateSegment> {
        // 步骤1: 额度过滤
        let affordable: Vec<CandidateSegment> = candidates
            .into_iter()
            .filter(|c| c.cto_used <= quota)
            .collect();

        // 步骤2: 按起点分组,保留组内输入顺序
        let mut groups: BTreeMap<usize, Vec<CandidateSegment>> = BTreeMap::new();
        for candidate in affordable {
            groups.entry(candidate.start_idx).or_default().push(candidate);
        }

        // 步骤3: 组内支配扫描
        let mut survivors = Vec::new();
        for group in groups.values() {
            for (i, a) in group.iter().enumerate() {
                let dominated = group.iter().enumerate().any(|(j, b)| {
                    if i == j {
                        return false;
                    }
                    let covers = b.end_idx >= a.end_idx
                        && b.cto_used <= a.cto_used
                        && b.total_days >= a.total_days;
                    let strictly = b.end_idx > a.end_idx
                        || b.cto_used < a.cto_used
                        || b.total_days > a.total_days;
                    // 完全并列时只让后出现者退场
                    covers && (strictly || j < i)
                });
                if !dominated {
                    survivors.push(a.clone());
                }
            }
        }

        // 步骤4: BTreeMap 遍历已按起点升序,再做一次稳定排序兜底
        survivors.sort_by_key(|c| c.start_idx);

        debug!(survivor_count = survivors.len(), "支配剪枝完成");
        survivors
    }
}

impl Default for DominancePruner {
    fn default() -> Self {
        Self::new()
    }
}
