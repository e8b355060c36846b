use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

fn get_input_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/gff");
    path.push(filename);
    path
}

#[test]
fn command_stats() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gor")?;
    let output = cmd
        .arg("stats")
        .arg(get_input_path("small.gff"))
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/gff/expected/small.stats");
    assert_eq!(stdout, fs::read_to_string(path)?);

    Ok(())
}

#[test]
fn command_stats_total() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gor")?;
    let output = cmd
        .arg("stats")
        .arg("--total")
        .arg("--sorted")
        .arg(get_input_path("sorted.gff"))
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "# Type 'chr1gene+' scored:         23\t3");
    assert_eq!(lines[3], "# Total scored: 26\t4");

    Ok(())
}

#[test]
fn command_stats_no_records() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gor")?;
    cmd.arg("stats")
        .arg("--total")
        .write_stdin("##gff-version 3\n# nothing here\n")
        .assert()
        .success()
        .stdout("# Total scored: 0\t0\n");

    Ok(())
}

#[test]
fn command_stats_large_scores() -> anyhow::Result<()> {
    let input = "\
chr1\tsrc\tgene\t1\t5\t9223372036854775807\t+\t.\tID=a
chr1\tsrc\tgene\t10\t20\t9223372036854775807\t+\t.\tID=b
chr1\tsrc\tgene\t15\t30\t1\t+\t.\tID=c
";
    let mut cmd = Command::cargo_bin("gor")?;
    cmd.arg("stats")
        .arg("--total")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            "# Type 'chr1gene+' scored: 18446744073709551614\t2\n# Total scored: 18446744073709551614\t2\n",
        );

    Ok(())
}
