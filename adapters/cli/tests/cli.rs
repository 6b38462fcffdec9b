use std::process::{Command, Output};

const BINARY: &str = env!("CARGO_BIN_EXE_lords-of-midnight");
const WORLD: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/world.json");
const CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/midnight.toml");

fn run(args: &[&str]) -> Output {
    run_with_log("off", args)
}

fn run_with_log(filter: &str, args: &[&str]) -> Output {
    Command::new(BINARY)
        .args(["--world", WORLD])
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("failed to invoke lords-of-midnight binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "lords-of-midnight failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn luxor_opens_at_the_tower_of_the_moon() {
    let stdout = stdout_of(&run(&["--commands", ""]));
    assert!(stdout.contains("== Luxor the Moonprince == [shield_luxor.png]"));
    assert!(stdout.contains(
        "Luxor stands at the Tower of the Moon, looking northeast to the forest."
    ));
    assert!(stdout.contains("It is dawn and Luxor is utterly invigorated."));
    assert!(
        stdout.contains('W'),
        "wolves in the forest ahead are drawn in the foreground"
    );
}

#[test]
fn travelling_north_costs_time_and_energy() {
    let stdout = stdout_of(&run(&["--config", CONFIG, "--commands", "1q"]));
    assert!(stdout.contains(
        "Luxor stands at the Downs of Valorn, looking north to the mountains."
    ));
    assert!(stdout.contains("6 hours of the day remain and Luxor is very invigorated."));
}

#[test]
fn cheat_mode_still_stops_at_the_frozen_wastes() {
    let stdout = stdout_of(&run(&["--cheat", "--commands", "v1qqqqqqqqqq"]));
    let last_scene = stdout
        .rsplit("== Morkin ==")
        .next()
        .expect("morkin's scene was painted");
    assert!(last_scene.contains("It is dawn and Morkin is utterly invigorated."));
    assert!(last_scene
        .contains("Morkin cannot travel: the destination terrain cannot be entered."));
    assert!(last_scene.contains("looking north to the frozen wastes."));
}

#[test]
fn quitting_stops_reading_keys() {
    let stdout = stdout_of(&run(&["--commands", "xq"]));
    assert!(!stdout.contains("Downs of Valorn"));
}

#[test]
fn anchors_subcommand_prints_intercardinal_rows() {
    let output = Command::new(BINARY)
        .args(["anchors", "intercardinal"])
        .output()
        .expect("failed to invoke lords-of-midnight binary");
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("row 0: (69, 474)"));
    assert!(stdout.contains("row 2: (512, 493)"));
    assert!(stdout.contains("row 3: (512, 541)"));
}

#[test]
fn missing_world_files_are_reported() {
    let output = Command::new(BINARY)
        .args(["--world", "does/not/exist.json", "--commands", ""])
        .output()
        .expect("failed to invoke lords-of-midnight binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read world map"));
}

#[test]
fn log_filter_follows_the_environment() {
    let verbose = run_with_log("debug", &["--commands", "=q"]);
    let _ = stdout_of(&verbose);
    let log = String::from_utf8_lossy(&verbose.stderr);
    assert!(log.contains("lord turned"), "debug events are shown: {log}");

    let silent = run_with_log("off", &["--commands", "=q"]);
    let _ = stdout_of(&silent);
    assert!(silent.stderr.is_empty(), "nothing is logged when logging is off");
}

#[test]
fn start_squares_beyond_the_map_are_refused_at_load() {
    let config = std::env::temp_dir().join(format!(
        "lords-of-midnight-far-start-{}.toml",
        std::process::id()
    ));
    std::fs::write(&config, "[scenario]\nstart = [2147483647, 0]\n")
        .expect("failed to write temporary config");
    let config_path = config.to_str().expect("temporary path is utf-8");

    let output = run(&["--config", config_path, "--commands", "q"]);
    let _ = std::fs::remove_file(&config);

    assert_eq!(output.status.code(), Some(1), "the load fails without a panic");
    assert!(String::from_utf8_lossy(&output.stderr).contains("lies outside the 48x48 map"));
}
