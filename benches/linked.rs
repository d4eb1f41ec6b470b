//! Benchmarks for the linked list and queue.
//!
//! Compares against the std collections doing the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_structures::{LinkedQueue, SinglyLinkedList};
use std::collections::{LinkedList, VecDeque};

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_push_poll");

    group.bench_function("linked_queue/u64", |b| {
        let mut q = LinkedQueue::<u64>::new();
        b.iter(|| {
            q.push(black_box(42));
            black_box(q.poll())
        });
    });

    group.bench_function("vec_deque/u64", |b| {
        let mut q = VecDeque::<u64>::with_capacity(1024);
        b.iter(|| {
            q.push_back(black_box(42));
            black_box(q.pop_front())
        });
    });

    group.finish();
}

fn bench_list_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_collect");

    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("singly_linked", size), &size, |b, &n| {
            b.iter(|| black_box((0..n).collect::<SinglyLinkedList<usize>>()))
        });
        group.bench_with_input(BenchmarkId::new("std_linked", size), &size, |b, &n| {
            b.iter(|| black_box((0..n).collect::<LinkedList<usize>>()))
        });
    }

    group.finish();
}

fn bench_list_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_index");

    for size in [100usize, 1_000] {
        let lst: SinglyLinkedList<usize> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("get_middle", size), &lst, |b, lst| {
            b.iter(|| black_box(lst.get(black_box(size / 2))))
        });

        group.bench_with_input(BenchmarkId::new("insert_remove_middle", size), &size, |b, &n| {
            let mut lst: SinglyLinkedList<usize> = (0..n).collect();
            b.iter(|| {
                lst.insert(black_box(n / 2), 0).ok();
                black_box(lst.remove(n / 2).ok())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_queue, bench_list_build, bench_list_index);
criterion_main!(benches);
