use std::{fs, process::Command};

use dungeon_map::{
    doors, maze, output, smooth, Dimensions, MapArt, MapBuilder, Stage, Tile,
};
use rand::{rngs::StdRng, SeedableRng};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_map-builder"))
}

#[test]
fn written_map_reads_back_as_the_same_maze() {
    let td = tempfile::tempdir().unwrap();
    let builder = MapBuilder::new(8, 5).unwrap();
    let (art, report) = builder.build(&mut StdRng::seed_from_u64(99));
    let dir = output::map_dir(td.path(), "level-1").unwrap();
    let path = output::write_map(&dir, &art).unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, art.to_string());

    let stage = Stage::parse(&text).unwrap();
    assert_eq!(stage.dimensions(), Dimensions::new(8, 5).unwrap());
    assert_eq!(stage.count(Tile::Door), report.doors);
    assert_eq!(maze::passage_count(&stage), 39);
    assert_eq!(maze::reachable_cells(&stage), 40);
}

#[test]
fn passes_compose_by_hand() {
    let mut rng = StdRng::seed_from_u64(5);
    let (mut stage, stats) = maze::generate(Dimensions::new(4, 4).unwrap(), &mut rng);
    assert_eq!(stats.passages, 15);
    let placed = doors::add_doors(&mut stage);
    let map = smooth::smooth(&stage);
    assert_eq!(map.to_string().matches('o').count(), placed.len());
    assert!(matches!(MapArt::Smoothed(map), MapArt::Smoothed(_)));
}

#[test]
fn cli_writes_smoothed_map() {
    let td = tempfile::tempdir().unwrap();
    let status = bin()
        .args(["3", "2", "caves", "--unicode", "--seed", "12", "--maps-root"])
        .arg(td.path())
        .status()
        .unwrap();
    assert!(status.success());

    let text = fs::read_to_string(td.path().join("caves").join("map.art")).unwrap();
    let rows = text.split('\n').collect::<Vec<_>>();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.chars().count() == 13));
    assert!(text.starts_with('╭'));
}

#[test]
fn cli_seed_makes_runs_repeatable() {
    let td = tempfile::tempdir().unwrap();
    for name in ["a", "b"] {
        let status = bin()
            .args(["10", "10", name, "--seed", "2024", "--maps-root"])
            .arg(td.path())
            .status()
            .unwrap();
        assert!(status.success());
    }
    let a = fs::read_to_string(td.path().join("a/map.art")).unwrap();
    let b = fs::read_to_string(td.path().join("b/map.art")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cli_rejects_bad_input_without_writing() {
    let td = tempfile::tempdir().unwrap();
    for args in [
        ["0", "4", "level"],
        ["4", "-3", "level"],
        ["four", "4", "level"],
        ["4", "4", "../outside"],
        ["2147483647", "1", "level"],
    ] {
        let status = bin()
            .args(args)
            .arg("--maps-root")
            .arg(td.path())
            .status()
            .unwrap();
        assert!(!status.success(), "{args:?} should fail");
    }
    assert_eq!(fs::read_dir(td.path()).unwrap().count(), 0);
}
