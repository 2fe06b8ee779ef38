use criterion::{Criterion, black_box, criterion_group, criterion_main};
use merlin::Transcript;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::KeySeed;

fn message_context() -> Transcript {
    let mut t = Transcript::new(b"bench");
    t.append_message(b"message", b"bench message");
    t
}

fn bench_expand(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let seed = KeySeed::random(&mut rng);

    c.bench_function("schnorr_expand", |bencher| {
        bencher.iter(|| {
            let sk = black_box(&seed).expand();
            black_box(sk);
        })
    });
}

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = KeySeed::random(&mut rng).expand();
    let ctx = message_context();

    c.bench_function("schnorr_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(black_box(ctx.clone()));
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = KeySeed::random(&mut rng).expand();
    let pk = sk.public_key();
    let ctx = message_context();
    let sig = sk.sign(ctx.clone());

    c.bench_function("schnorr_verify", |bencher| {
        bencher.iter(|| {
            let outcome = pk.verify(black_box(ctx.clone()), black_box(&sig));
            black_box(outcome).expect("verify");
        })
    });
}

criterion_group!(benches, bench_expand, bench_sign, bench_verify);
criterion_main!(benches);
