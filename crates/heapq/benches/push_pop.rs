//! Compare the cost of pushing then draining against the standard library's
//! [`std::collections::BinaryHeap`].
use divan;
use heapq::{MaxQueue, MinQueue, PriorityQueue};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{BinaryHeap, VecDeque};

const SCALE_FACTORS: [usize; 4] = [1024, 4096, 16384, 65536];

fn random_input(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen()).collect()
}

trait Workload {
    fn run(values: Vec<u64>) -> u64;
}

struct Heapq;
impl Workload for Heapq {
    fn run(values: Vec<u64>) -> u64 {
        let mut queue = MaxQueue::with_capacity(values.len());
        for value in values {
            queue.push(value);
        }
        let mut total = 0u64;
        while let Ok(value) = queue.pop() {
            total = total.wrapping_add(value);
        }
        total
    }
}

struct HeapqMin;
impl Workload for HeapqMin {
    fn run(values: Vec<u64>) -> u64 {
        let mut queue = MinQueue::with_capacity(values.len());
        queue.extend(values);
        let mut total = 0u64;
        while let Ok(value) = queue.pop() {
            total = total.wrapping_add(value);
        }
        total
    }
}

struct HeapqDeque;
impl Workload for HeapqDeque {
    fn run(values: Vec<u64>) -> u64 {
        let mut queue = PriorityQueue::<u64, VecDeque<u64>>::with_capacity(values.len());
        queue.extend(values);
        let mut total = 0u64;
        while let Ok(value) = queue.pop() {
            total = total.wrapping_add(value);
        }
        total
    }
}

struct Std;
impl Workload for Std {
    fn run(values: Vec<u64>) -> u64 {
        let mut heap = BinaryHeap::with_capacity(values.len());
        for value in values {
            heap.push(value);
        }
        let mut total = 0u64;
        while let Some(value) = heap.pop() {
            total = total.wrapping_add(value);
        }
        total
    }
}

#[divan::bench(
    name = "push_then_drain",
    types = [Heapq, HeapqMin, HeapqDeque, Std],
    consts = SCALE_FACTORS,
)]
fn push_then_drain<W: Workload, const ELEMENTS: usize>(bencher: divan::Bencher) {
    bencher
        .counter(divan::counter::ItemsCount::new(ELEMENTS))
        .with_inputs(|| random_input(ELEMENTS))
        .bench_values(|values| W::run(values))
}

fn main() {
    divan::main()
}
