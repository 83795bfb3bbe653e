//! Benchmarks for zipper traversal and editing.
//!
//! Performance budgets:
//! - Full pre-order `next` walk, 10k nodes: **< 2ms**
//! - Identity `traverse`, 10k nodes: **< 3ms**
//! - `find` of the last node, 10k nodes: **< 2ms**
//! - Single deep replace + `root` rebuild, depth 1k: **< 200us**

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use treezip_core::{Direction, Term, Zipper, zip};

/// A list of `width` calls, each holding `width` integers.
fn wide_tree(width: usize) -> Term {
    let rows = (0..width)
        .map(|row| {
            let cells = (0..width).map(|col| Term::int((row * width + col) as i64));
            Term::call("Row", cells.collect())
        })
        .collect();
    Term::list(rows)
}

/// A chain of single-child calls ending in a leaf.
fn deep_tree(depth: usize) -> Term {
    (0..depth).fold(Term::int(0), |inner, _| Term::call("Wrap", vec![inner]))
}

fn shapes() -> Vec<(&'static str, Term)> {
    vec![
        ("wide_100x100", wide_tree(100)),
        ("deep_1000", deep_tree(1000)),
    ]
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_next_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("zipper/next_walk");

    for (label, tree) in shapes() {
        let count = treezip_core::tree::node_count(&tree);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("walk", label), &tree, |b, tree| {
            b.iter(|| zip(tree.clone()).iter().count());
        });
    }

    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("zipper/traverse");

    for (label, tree) in shapes() {
        group.bench_with_input(BenchmarkId::new("identity", label), &tree, |b, tree| {
            b.iter(|| zip(tree.clone()).traverse(|z| z));
        });
        group.bench_with_input(BenchmarkId::new("increment", label), &tree, |b, tree| {
            b.iter(|| {
                zip(tree.clone()).traverse(|z| match z.node().as_int() {
                    Some(n) => z.replace(Term::int(n + 1)),
                    None => z,
                })
            });
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("zipper/find");

    let tree = wide_tree(100);
    let last = Term::int(100 * 100 - 1);
    group.bench_function("last_leaf", |b| {
        b.iter(|| zip(tree.clone()).find(Direction::Next, |t| t == &last));
    });
    group.bench_function("missing", |b| {
        b.iter(|| zip(tree.clone()).find(Direction::Next, |t| t == &Term::int(-1)));
    });

    group.finish();
}

fn bench_deep_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("zipper/deep_edit");

    let tree = deep_tree(1000);
    let bottom: Zipper<Term> = zip(tree).iter().last().unwrap_or_else(|| zip(Term::int(0)));
    group.bench_function("replace_and_root", |b| {
        b.iter(|| bottom.replace(Term::int(1)).root());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_next_walk,
    bench_traverse,
    bench_find,
    bench_deep_edit
);
criterion_main!(benches);
