// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use roadgraph::model::ElementId;
use roadgraph::ops::{apply_op, ApplyOutcome, RoadmapOp};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `ops.apply`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `delete_group_wide`,
//   `transfer_deep`).
// - If implementations move/deduplicate, update the wiring but do not
//   rename group or case IDs.
fn checksum_apply_outcome(outcome: &ApplyOutcome) -> u64 {
    let mut acc = 0u64;
    acc = acc
        .wrapping_mul(131)
        .wrapping_add(outcome.delta.added.len() as u64);
    acc = acc
        .wrapping_mul(131)
        .wrapping_add(outcome.delta.removed.len() as u64);
    acc = acc
        .wrapping_mul(131)
        .wrapping_add(outcome.delta.updated.len() as u64);
    acc = acc
        .wrapping_mul(131)
        .wrapping_add(outcome.applied() as u64);
    acc
}

fn bench_eid(value: &str) -> ElementId {
    ElementId::new(value).expect("bench element id")
}

fn benches_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.apply");

    let wide = fixtures::wide_board(8, 64);
    let deep = fixtures::deep_board(32);

    let delete_wide = RoadmapOp::DeleteNode {
        node_id: bench_eid("group_0000"),
    };
    group.throughput(Throughput::Elements(64));
    group.bench_function("delete_group_wide", {
        let template = wide.clone();
        let op = delete_wide.clone();
        move |b| {
            b.iter_batched(
                || template.clone(),
                |mut board| {
                    let outcome = apply_op(&mut board, black_box(&op));
                    black_box(checksum_apply_outcome(&outcome))
                },
                BatchSize::SmallInput,
            )
        }
    });

    let transfer_deep = RoadmapOp::TransferNode {
        node_id: bench_eid("task_bottom"),
        new_parent_id: Some(bench_eid("group_0000")),
    };
    group.throughput(Throughput::Elements(1));
    group.bench_function("transfer_deep", {
        let template = deep.clone();
        let op = transfer_deep.clone();
        move |b| {
            b.iter_batched(
                || template.clone(),
                |mut board| {
                    let outcome = apply_op(&mut board, black_box(&op));
                    black_box(checksum_apply_outcome(&outcome))
                },
                BatchSize::SmallInput,
            )
        }
    });

    let copy_contained = RoadmapOp::CopyNode {
        node_id: bench_eid("task_0000_0000"),
    };
    group.throughput(Throughput::Elements(1));
    group.bench_function("copy_contained", {
        let template = wide.clone();
        let op = copy_contained.clone();
        move |b| {
            b.iter_batched(
                || template.clone(),
                |mut board| {
                    let outcome = apply_op(&mut board, black_box(&op));
                    black_box(checksum_apply_outcome(&outcome))
                },
                BatchSize::SmallInput,
            )
        }
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ops
}
criterion_main!(benches);
