//! Bulk heapify against pushing each element, for inputs that are random and
//! already in ascending order (the worst case for sifting up into a max-heap).
use divan;
use heapq::{compare::Greater, MaxQueue, PriorityQueue};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const SCALE_FACTORS: [usize; 3] = [1024, 16384, 262144];

trait Input {
    fn generate(len: usize) -> Vec<usize>;
}

struct Ascending;
impl Input for Ascending {
    fn generate(len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

struct Shuffled;
impl Input for Shuffled {
    fn generate(len: usize) -> Vec<usize> {
        let mut values: Vec<usize> = (0..len).collect();
        values.shuffle(&mut StdRng::seed_from_u64(len as u64));
        values
    }
}

#[divan::bench(types = [Ascending, Shuffled], consts = SCALE_FACTORS)]
fn bulk<I: Input, const ELEMENTS: usize>(bencher: divan::Bencher) {
    bencher
        .counter(divan::counter::ItemsCount::new(ELEMENTS))
        .with_inputs(|| I::generate(ELEMENTS))
        .bench_values(|values| PriorityQueue::<_, Vec<_>, _>::from_sequence(values, Greater))
}

#[divan::bench(types = [Ascending, Shuffled], consts = SCALE_FACTORS)]
fn incremental<I: Input, const ELEMENTS: usize>(bencher: divan::Bencher) {
    bencher
        .counter(divan::counter::ItemsCount::new(ELEMENTS))
        .with_inputs(|| I::generate(ELEMENTS))
        .bench_values(|values| {
            let mut queue = MaxQueue::with_capacity(values.len());
            for value in values {
                queue.push(value);
            }
            queue
        })
}

fn main() {
    divan::main()
}
