use c4_core::consts::{DIGEST_LEN, ID_LEN, ID_PREFIX};
use c4_core::{decode, encode, reduce, C4Id, Digest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_digest(rng: &mut StdRng) -> Digest {
    let mut bytes = [0u8; DIGEST_LEN];
    rng.fill(&mut bytes[..]);
    Digest(bytes)
}

#[test]
fn random_digests_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0xc4);
    for _ in 0..500 {
        let d = random_digest(&mut rng);
        let id = encode(&d);
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id.as_str().starts_with(ID_PREFIX));
        assert_eq!(decode(id.as_str()).unwrap(), d);
        assert_eq!(encode(&decode(id.as_str()).unwrap()), id);
    }
}

#[test]
fn sparse_digests_roundtrip() {
    // single set byte at each position exercises every limb boundary
    for idx in 0..DIGEST_LEN {
        for v in [1u8, 0x80, 0xff] {
            let mut bytes = [0u8; DIGEST_LEN];
            bytes[idx] = v;
            let d = Digest(bytes);
            assert_eq!(decode(encode(&d).as_str()).unwrap(), d, "byte {idx} = {v:#x}");
        }
    }
}

#[test]
fn reduce_is_deterministic_under_shuffle() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..40usize {
        let ids: Vec<C4Id> = (0..n).map(|_| encode(&random_digest(&mut rng))).collect();
        let expected = reduce(&ids).unwrap();

        let mut shuffled = ids.clone();
        for i in (1..shuffled.len()).rev() {
            let j = rng.random_range(0..=i);
            shuffled.swap(i, j);
        }
        let extra = shuffled[rng.random_range(0..n)].clone();
        shuffled.push(extra);

        assert_eq!(reduce(&shuffled).unwrap(), expected, "n = {n}");
    }
}
