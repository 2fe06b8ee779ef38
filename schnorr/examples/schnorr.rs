use merlin::Transcript;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{KeySeed, PublicKey, SecretKey, Signature};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = KeySeed::random(&mut rng).expand();
    let pk = sk.public_key();

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");

    let mut ctx = Transcript::new(b"example");
    ctx.append_message(b"message", b"hello schnorr");

    let sig = sk.sign(ctx.clone());
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SecretKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    pk2.verify(ctx, &sig2).expect("verify");

    let _ = sk2;
}
