// ==========================================
// 巡检排班系统 - 报表分桶引擎
// ==========================================
// 职责: 将单个巡检员的站点队列划分到时间分桶,并计算站点数/工人数
// 输入: 站点队列 + 站点目录 + 工人名录 + 分桶方案 + 分配模式
// 输出: BucketReport (只读派生数据)
// ==========================================

use crate::domain::location::{LocationCatalog, WorkerDirectory};
use crate::domain::report::{Bucket, BucketReport, BucketScheme, BucketTotals};
use crate::domain::types::DistributionMode;
use std::ops::Range;
use tracing::instrument;

/// Strict 模式下第 `index` 个分桶对应的队列区间
///
/// base = total / buckets, remainder = total % buckets,
/// 前 remainder 个分桶各多分 1 个。
pub fn strict_slice_bounds(total: usize, buckets: usize, index: usize) -> Range<usize> {
    if buckets == 0 {
        return 0..0;
    }
    let base = total / buckets;
    let remainder = total % buckets;
    let start = index * base + index.min(remainder);
    let end = (index + 1) * base + (index + 1).min(remainder);
    start.min(total)..end.min(total)
}

// ==========================================
// Bucketizer - 报表分桶引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct Bucketizer;

impl Bucketizer {
    pub fn new() -> Self {
        Self
    }

    /// 队列分桶
    ///
    /// # 说明
    /// - Strict: 按原始ID列表长度切分 (未解析ID仍占位),各分桶互不重叠
    /// - Flexible: 每个分桶都是完整队列
    /// - 未解析的站点/工人不计入任何计数
    #[instrument(skip(self, queue, locations, workers, scheme), fields(
        queue_len = queue.len(),
        buckets = scheme.len(),
        mode = %mode
    ))]
    pub fn bucketize(
        &self,
        queue: &[String],
        locations: &LocationCatalog,
        workers: &WorkerDirectory,
        scheme: &BucketScheme,
        mode: DistributionMode,
    ) -> BucketReport {
        let bucket_count = scheme.len();
        let mut buckets = Vec::with_capacity(bucket_count);
        let mut totals = BucketTotals::default();

        for (index, label) in scheme.labels().iter().enumerate() {
            let subset: &[String] = match mode {
                DistributionMode::Strict => {
                    &queue[strict_slice_bounds(queue.len(), bucket_count, index)]
                }
                DistributionMode::Flexible => queue,
            };

            let (site_count, workforce_count) = Self::aggregate(subset, locations, workers);
            totals.site_count += site_count;
            totals.workforce_count += workforce_count;

            buckets.push(Bucket {
                label: label.clone(),
                location_ids: subset.to_vec(),
                site_count,
                workforce_count,
            });
        }

        tracing::debug!(
            total_sites = totals.site_count,
            total_workforce = totals.workforce_count,
            "分桶完成"
        );

        BucketReport {
            mode,
            buckets,
            totals,
        }
    }

    /// 计算 (站点数, 工人数)
    fn aggregate(
        subset: &[String],
        locations: &LocationCatalog,
        workers: &WorkerDirectory,
    ) -> (usize, usize) {
        subset
            .iter()
            .filter_map(|id| locations.get(id))
            .fold((0, 0), |(sites, headcount), location| {
                let resolved = location
                    .worker_ids
                    .iter()
                    .filter(|wid| workers.contains(wid))
                    .count();
                (sites + 1, headcount + resolved)
            })
    }
}

impl Default for Bucketizer {
    fn default() -> Self {
        Self::new()
    }
}
