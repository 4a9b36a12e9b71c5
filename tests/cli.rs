use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

fn hex2bin(args : &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hex2bin"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn usage_exits_zero() {
    let dir = tempfile::tempdir().unwrap();

    for args in [vec![], vec![dir.path()]] {
        let out = hex2bin(&args);

        assert_eq!(Some(0), out.status.code(), "\nargs: {:?}", args);
        assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"), "\nargs: {:?}", args);
    }
}

#[test]
fn converts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("listing.txt");
    let output = dir.path().join("out.bin");
    fs::write(&input, b"DEADBEEF").unwrap();

    let out = hex2bin(&[input.as_path(), output.as_path()]);

    assert_eq!(Some(0), out.status.code());
    assert_eq!(vec![0xde, 0xad, 0xbe, 0xef], fs::read(&output).unwrap());
    assert!(String::from_utf8_lossy(&out.stdout).contains("of size '4'"));
}

#[test]
fn invalid_digit_warns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("listing.txt");
    let output = dir.path().join("out.bin");
    fs::write(&input, b"DEA#BEEF").unwrap();

    let out = hex2bin(&[input.as_path(), output.as_path()]);

    assert_eq!(Some(0), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid hexadecimal digit '#'"));
    assert_eq!(vec![0xde, 0xa0, 0xbe, 0xef], fs::read(&output).unwrap());
}

#[test]
fn fatal_errors_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let empty = dir.path().join("empty.txt");
    let listing = dir.path().join("listing.txt");
    let existing = dir.path().join("existing.bin");
    let output = dir.path().join("out.bin");
    fs::write(&empty, b"").unwrap();
    fs::write(&listing, b"DEADBEEF").unwrap();
    fs::write(&existing, b"keep me").unwrap();

    let tests = vec![
        ((&missing, &output), "does it exist?"),
        ((&empty, &output), "has 0 bytes"),
        ((&listing, &existing), "already exists"),
    ];

    for ((input, output), exp) in tests {
        let out = hex2bin(&[input.as_path(), output.as_path()]);
        let stderr = String::from_utf8_lossy(&out.stderr);

        assert_eq!(Some(1), out.status.code(), "\ntc: {:?}", (input, output));
        assert!(stderr.contains(exp), "\ntc: {:?}\nstderr: {}", (input, output), stderr);
    }

    assert_eq!(b"keep me".to_vec(), fs::read(&existing).unwrap());
    assert!(!output.exists());
}

#[test]
fn strict_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("listing.txt");
    let output = dir.path().join("out.bin");
    fs::write(&input, b"DEA#BEEF").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_hex2bin"))
        .arg("--strict")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(Some(1), out.status.code());
    assert!(!output.exists());
}
