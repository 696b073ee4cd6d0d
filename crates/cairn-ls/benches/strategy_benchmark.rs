// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cairn_ls::{FirstChoice, LocalSearchStrategy, SteepestAscent};
use cairn_puzzles::NQueens;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

type IntegerType = i64;

fn bench_steepest_ascent(c: &mut Criterion) {
    let problem = NQueens::new(8, vec![0; 8]);

    c.bench_function("steepest_ascent_8_queens", |b| {
        b.iter(|| {
            let mut strategy = SteepestAscent::new();
            let outcome: cairn_ls::LocalSearchOutcome<Vec<u8>, IntegerType> =
                strategy.search(black_box(&problem));
            black_box(outcome)
        })
    });
}

fn bench_first_choice(c: &mut Criterion) {
    let problem = NQueens::new(8, vec![0; 8]);

    c.bench_function("first_choice_8_queens", |b| {
        b.iter(|| {
            let mut strategy = FirstChoice::new(Pcg64Mcg::seed_from_u64(0xC41), 1_000);
            let outcome: cairn_ls::LocalSearchOutcome<Vec<u8>, IntegerType> =
                strategy.search(black_box(&problem));
            black_box(outcome)
        })
    });
}

criterion_group!(benches, bench_steepest_ascent, bench_first_choice);
criterion_main!(benches);
