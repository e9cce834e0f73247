use combinate::{
    Combinations, Enumerable, FixedCombinations, GeneratorSpec, PowerSet, Product, Range,
};
use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

#[divan::bench]
fn fixed_combinations() -> usize {
    let mut c = FixedCombinations::<4, 0, 20>::new();
    let mut total = 0;
    while !c.exhausted() {
        total += c[3];
        c.advance();
    }
    total
}

#[divan::bench(args = [2, 4, 8])]
fn owned_combinations(bencher: divan::Bencher, k: usize) {
    bencher
        .with_inputs(|| (0..20).map(|i| i.to_string()).collect::<Vec<_>>())
        .bench_values(|values| {
            let mut c = Combinations::new(values, k).unwrap();
            let mut total = 0;
            while !c.exhausted() {
                total += c.current().unwrap().len();
                c.advance();
            }
            total
        });
}

#[divan::bench(args = [4, 8, 12])]
fn power_set_cycle(max_size: usize) -> usize {
    let mut p = PowerSet::new(12, max_size).unwrap();
    let mut total = 0;
    while !p.exhausted() {
        total += p.subset_size();
        p.advance();
    }
    total
}

#[divan::bench]
fn product_of_ranges() -> u64 {
    let mut p = Product::new(Range::new(0u64, 300).unwrap(), Range::new(0u64, 300).unwrap());
    let mut total = 0;
    while !p.exhausted() {
        let (a, b) = p.current().unwrap();
        total += a ^ b;
        p.advance();
    }
    total
}

#[divan::bench(args = ["choose(10, 3)", "product(powerset(6, 3), range(0, 10))"])]
fn from_spec(bencher: divan::Bencher, s: &str) {
    let spec = divan::black_box(GeneratorSpec::parse(s).unwrap());
    bencher.bench(|| spec.build().unwrap().count());
}
