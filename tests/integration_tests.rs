use assert_cmd::Command;

fn tincture() -> Command {
    let mut cmd = Command::cargo_bin("tincture").unwrap();
    cmd.env_remove("TINCTURE_COLOR_MODE");
    cmd.env_remove("TINCTURE_SPACE");
    cmd.env_remove("TINCTURE_LOG");
    cmd
}

#[test]
fn mix_defaults_to_luv_halfway() {
    tincture()
        .arg("mix")
        .arg("0,0,0")
        .arg("1,1,1")
        .assert()
        .success()
        .stdout("#777777\n");

    tincture()
        .arg("mix")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#be0090\n");

    tincture()
        .arg("mix")
        .arg("--space=luv")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#be0090\n");
}

#[test]
fn mix_in_selected_space() {
    tincture()
        .arg("mix")
        .arg("--space")
        .arg("RGB")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#800080\n");

    tincture()
        .arg("mix")
        .arg("-s")
        .arg("hsl")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#ff00ff\n");

    tincture()
        .arg("mix")
        .arg("-s")
        .arg("hsv")
        .arg("0,0,1")
        .arg("1,0,0")
        .assert()
        .success()
        .stdout("#00ff00\n");
}

#[test]
fn mix_ratio() {
    tincture()
        .arg("mix")
        .arg("--space=rgb")
        .arg("--ratio=0")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#ff0000\n");

    tincture()
        .arg("mix")
        .arg("--space=rgb")
        .arg("--ratio=1")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#0000ff\n");

    tincture()
        .arg("mix")
        .arg("--space=rgb")
        .arg("--ratio")
        .arg("-1")
        .arg("0.5,0.5,0.5")
        .arg("1,0.5,0")
        .assert()
        .success()
        .stdout("#0080ff\n");
}

#[test]
fn mix_output_format() {
    tincture()
        .arg("mix")
        .arg("--space=rgb")
        .arg("--format=hsl")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("hsl(300, 100.0%, 25.0%)\n");

    tincture()
        .arg("mix")
        .arg("--space=rgb")
        .arg("--format=rgb")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("rgb(0.5, 0, 0.5)\n");
}

#[test]
fn mix_space_from_environment() {
    tincture()
        .env("TINCTURE_SPACE", "rgb")
        .arg("mix")
        .arg("1,0,0")
        .arg("0,0,1")
        .assert()
        .success()
        .stdout("#800080\n");
}

#[test]
fn mix_in_cymk_is_an_error() {
    let output = tincture()
        .arg("mix")
        .arg("--space=cymk")
        .arg("1,0,0")
        .arg("0,0,1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("[tincture error]: interpolation in the CYMK color space is not supported"));
}

#[test]
fn mix_rejects_malformed_colors() {
    let output = tincture()
        .arg("mix")
        .arg("1,0")
        .arg("0,0,1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not read color '1,0'"));

    tincture().arg("mix").arg("red").arg("blue").assert().failure();
}

#[test]
fn forced_color_mode_draws_swatch() {
    tincture()
        .arg("--color-mode=24bit")
        .arg("mix")
        .arg("--space=rgb")
        .arg("1,0,0")
        .arg("1,0,0")
        .assert()
        .success()
        .stdout("  \x1b[48;2;255;0;0m      \x1b[0m  #ff0000\n");
}

#[test]
fn spaces_lists_every_space() {
    let output = tincture().arg("spaces").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(vec!["rgb", "hsv", "hsl", "luv", "hcl", "lab", "cymk"], names);
}
