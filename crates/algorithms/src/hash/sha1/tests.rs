use super::*;

#[test]
fn test_sha1_empty_string() {
    let expected = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    assert_eq!(hex::encode(Sha1::digest(b"")), expected);
}

#[test]
fn test_sha1_abc() {
    let expected = "a9993e364706816aba3e25717850c26c9cd0d89d";
    assert_eq!(hex::encode(Sha1::digest(b"abc")), expected);
}

#[test]
fn test_sha1_two_block_message() {
    let expected = "84983e441c3bd26ebaae4aa1f95129e5e54670f1";
    let result = Sha1::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
    assert_eq!(hex::encode(result), expected);
}

#[test]
fn test_sha1_incremental() {
    let mut hasher = Sha1::new();
    hasher.update(b"abc").update(b"defghijklmnopqrstuvwxyz");
    let expected = "32d10c7b8cf96570ca04ce37f2a19d84240d3a89";
    assert_eq!(hex::encode(hasher.finalize()), expected);
}

#[test]
fn test_sha1_million_a() {
    let chunk = [b'a'; 1000];
    let mut hasher = Sha1::new();
    for _ in 0..1000 {
        hasher.update(&chunk);
    }
    assert_eq!(hex::encode(hasher.finalize()), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

#[test]
fn test_split_points_agree() {
    let data: Vec<u8> = (0..200u8).collect();
    let whole = Sha1::digest(&data);
    for split in [1, 55, 56, 63, 64, 65, 128, 199] {
        let mut hasher = Sha1::new();
        hasher.update(&data[..split]).update(&data[split..]);
        assert_eq!(hasher.finalize(), whole, "split at {}", split);
    }
}

#[test]
fn test_finalize_resets() {
    let mut hasher = Sha1::new();
    hasher.update(b"abc");
    let _ = hasher.finalize();
    assert_eq!(hasher.finalize(), Sha1::digest(b""));
}
