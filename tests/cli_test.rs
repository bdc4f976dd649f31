use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile;

type STDRESULT = Result<(),Box<dyn std::error::Error>>;

fn round_trip(data: &[u8]) -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("input.bin");
    let cmp_path = temp_dir.path().join("compressed.lzw");
    let out_path = temp_dir.path().join("output.bin");
    std::fs::File::create(&in_path)?.write_all(data)?;

    Command::cargo_bin("meteolzw")?
        .arg("compress")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&cmp_path)
        .assert()
        .success();

    Command::cargo_bin("meteolzw")?
        .arg("expand")
        .arg("-i").arg(&cmp_path)
        .arg("-o").arg(&out_path)
        .assert()
        .success();

    let expanded = std::fs::read(out_path)?;
    assert_eq!(expanded, data);
    Ok(())
}

#[test]
fn round_trips_a_small_text_file() -> STDRESULT {
    round_trip(b"I am Sam. Sam I am. I do not like this Sam I am.\n")
}

#[test]
fn round_trips_an_empty_file() -> STDRESULT {
    round_trip(b"")
}

#[test]
fn round_trips_a_highly_repetitive_file() -> STDRESULT {
    round_trip(&vec![b'z'; 20_000])
}

#[test]
fn verbose_flag_is_accepted() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("input.bin");
    let cmp_path = temp_dir.path().join("compressed.lzw");
    // Distinct two-byte prefixes mint a new dictionary entry on almost
    // every byte, guaranteeing next_code crosses 511 and a BUMP_CODE is
    // emitted (and hence a '#' marker) well within this input.
    let mut data = Vec::new();
    for hi in 0..=255u8 {
        data.push(hi);
        data.push(0);
    }
    std::fs::File::create(&in_path)?.write_all(&data)?;

    Command::cargo_bin("meteolzw")?
        .arg("compress")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&cmp_path)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("#"));
    Ok(())
}

#[test]
fn missing_input_file_fails() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let out_path = temp_dir.path().join("output.bin");
    Command::cargo_bin("meteolzw")?
        .arg("compress")
        .arg("-i").arg(temp_dir.path().join("does-not-exist"))
        .arg("-o").arg(&out_path)
        .assert()
        .failure();
    Ok(())
}
