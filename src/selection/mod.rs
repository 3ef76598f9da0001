//! Selection
//!
//! Picks the entry with the maximum priority score as "next to review".
//!
//! Ties are broken deterministically by ascending `id`, so repeated runs on
//! identical snapshots always pick the same entry. An empty collection yields
//! `None` — a legitimate "nothing left to review" state, not an error.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::priority::{priority_score, score_collection};
use crate::types::WordEntry;

/// 带得分的条目，供复习队列视图使用
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEntry {
    pub id: String,
    pub word: String,
    pub score: f64,
}

/// 选出下一个待复习的条目
///
/// 返回优先级最高的条目；得分相同时取 `id` 较小者。
/// 空集合返回 `None`。
pub fn select_next<'a>(entries: &'a [WordEntry], now_ms: i64) -> Option<&'a WordEntry> {
    let mut best: Option<(&WordEntry, f64)> = None;

    for entry in entries {
        let score = priority_score(entry, now_ms);
        match best {
            None => best = Some((entry, score)),
            Some((best_entry, best_score)) => {
                if score > best_score || (score == best_score && entry.id < best_entry.id) {
                    best = Some((entry, score));
                }
            }
        }
    }

    if let Some((entry, score)) = best {
        log::debug!(
            "selected next entry: word={} score={:.3} shown_times={}",
            entry.word,
            score,
            entry.shown_times
        );
    }

    best.map(|(entry, _)| entry)
}

/// 按优先级降序排列整个集合
///
/// 得分并行计算；排序稳定可复现 (得分相同时按 `id` 升序)。
pub fn rank_collection(entries: &[WordEntry], now_ms: i64) -> Vec<ScoredEntry> {
    let scores = score_collection(entries, now_ms);

    let mut ranked: Vec<ScoredEntry> = entries
        .iter()
        .zip(scores)
        .map(|(entry, score)| ScoredEntry {
            id: entry.id.clone(),
            word: entry.word.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    ranked
}
