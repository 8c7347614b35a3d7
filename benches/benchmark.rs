use bencher::{benchmark_group, benchmark_main, Bencher};

use bounded_stack::Stack;

/// Fill to capacity, then drain. The hot loop of an evaluation pass.
fn bench_fill_drain(bench: &mut Bencher) {
    let mut st = Stack::with_capacity(1024).unwrap();
    bench.iter(|| {
        for i in 0..1024 {
            st.push(i as f32).unwrap();
        }
        while !st.is_empty() {
            st.pop().unwrap();
        }
    });
}

fn bench_push_pop_pair(bench: &mut Bencher) {
    let mut st = Stack::new();
    st.push(1.0).unwrap();
    bench.iter(|| {
        st.push(2.0).unwrap();
        st.pop().unwrap()
    });
}

fn bench_peek(bench: &mut Bencher) {
    let mut st = Stack::new();
    st.push(1.0).unwrap();
    bench.iter(|| st.peek().unwrap());
}

benchmark_group!(benches, bench_fill_drain, bench_push_pop_pair, bench_peek);
benchmark_main!(benches);
