// cargo bench --bench profile_capture -- --profile-time=5
//
// The protobuf profile is written under target/criterion/<bench name>/profile/.

use criterion::{criterion_group, criterion_main, Criterion};
use pcap_timing::iterate_capture;
use pprof::criterion::{Output, PProfProfiler};

fn synthetic_pcap(n: u32) -> Vec<u8> {
    let packet = [0u8; 60];
    let mut v = Vec::new();
    v.extend_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    v.extend_from_slice(&[2, 0, 4, 0]);
    for x in [0u32, 0, 0xffff, 1].iter() {
        v.extend_from_slice(&x.to_le_bytes());
    }
    for i in 0..n {
        for x in [i, 0, packet.len() as u32, packet.len() as u32].iter() {
            v.extend_from_slice(&x.to_le_bytes());
        }
        v.extend_from_slice(&packet);
    }
    v
}

fn profile_iterate_capture(c: &mut Criterion) {
    let bytes = synthetic_pcap(100_000);
    c.bench_function("profile_iterate_capture 100k", |b| {
        b.iter(|| {
            let stats = iterate_capture(&bytes[..], 65536).expect("iterate_capture");
            assert_eq!(stats.packets, 100_000);
        })
    });
}

fn profiled() -> Criterion {
    //Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Protobuf))
}

criterion_group! {
    name = benches;
    config = profiled();
    targets = profile_iterate_capture
}
criterion_main!(benches);
