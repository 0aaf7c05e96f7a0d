use super::*;

const KEY: &str = "9661410ab797d8a9eb767c21172df6c7";
const IV: &str = "4b5c2f003e67f39557a8d26f3da2b155";

fn keystream<C: StreamCipher>(mut cipher: C, len: usize) -> Vec<u8> {
    let key = hex::decode(KEY).unwrap();
    let iv = hex::decode(IV).unwrap();
    cipher.init(CipherParameters::with_iv(CipherParameters::key(&key), &iv)).unwrap();

    let mut out = vec![0u8; len];
    cipher.process_bytes(&vec![0u8; len], 0, len, &mut out, 0).unwrap();
    out
}

fn check_offsets(stream: &[u8], expected: [&str; 4]) {
    let offsets = [0usize, 252, 1020, 102396];
    for (off, want) in offsets.iter().zip(expected) {
        assert_eq!(hex::encode(&stream[*off..*off + 4]), want, "offset {}", off);
    }
}

#[test]
fn test_vmpc_reference_stream() {
    let stream = keystream(Vmpc::new(), 102400);
    check_offsets(&stream, ["a82479f5", "b8fc66a4", "e05640a5", "81ca499a"]);
}

#[test]
fn test_ksa3_reference_stream() {
    let stream = keystream(VmpcKsa3::new(), 102400);
    check_offsets(&stream, ["b6ebaefe", "48172473", "1daec35a", "1da7e1dc"]);
}

#[test]
fn test_names_and_reset() {
    assert_eq!(Vmpc::new().algorithm_name(), "VMPC");
    assert_eq!(VmpcKsa3::default().algorithm_name(), "VMPC-KSA3");

    let mut vmpc = Vmpc::new();
    vmpc.init(CipherParameters::with_iv(CipherParameters::key(b"key"), b"iv")).unwrap();
    let first: Vec<u8> = (0..64).map(|_| vmpc.return_byte(0).unwrap()).collect();
    vmpc.reset();
    let second: Vec<u8> = (0..64).map(|_| vmpc.return_byte(0).unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_parameter_checks() {
    let mut vmpc = Vmpc::new();
    assert!(vmpc.return_byte(0).is_err());
    assert!(vmpc.init(CipherParameters::key(&[1u8; 16])).is_err());
    assert!(vmpc.init(CipherParameters::with_iv(CipherParameters::key(&[]), &[1u8; 16])).is_err());
    assert!(vmpc.init(CipherParameters::with_iv(CipherParameters::key(&[1u8; 16]), &[])).is_err());
    assert!(vmpc
        .init(CipherParameters::with_iv(CipherParameters::key(&[1u8; 769]), &[1u8; 16]))
        .is_err());
    assert!(vmpc
        .init(CipherParameters::with_iv(CipherParameters::key(&[1u8; 768]), &[1u8; 768]))
        .is_ok());
}
