use criterion::Criterion;

pub type BenchCriterion = Criterion;

pub fn bench_criterion() -> BenchCriterion {
    Criterion::default().configure_from_args()
}
