use rand::SeedableRng;
use rand_wyrand::WyRand;

use maze::{generate, MazeGrid};

#[test]
fn single_cell() {
    let maze = generate(1, 1, &mut WyRand::seed_from_u64(0));
    assert!(!maze.is_empty());
    assert_eq!(maze.shortest_path([0, 0], [0, 0]), vec![[0, 0]]);
}

#[test]
fn two_cells() {
    for seed in 0..20 {
        let maze = generate(1, 2, &mut WyRand::seed_from_u64(seed));
        assert_eq!(maze.shortest_path([0, 0], [0, 1]), vec![[0, 0], [0, 1]]);
    }
}

#[test]
fn corner_to_corner() {
    for seed in 0..20 {
        let maze = generate(5, 5, &mut WyRand::seed_from_u64(seed));
        let path = maze.shortest_path([0, 0], [4, 4]);
        assert_eq!(path.first(), Some(&[0, 0]));
        assert_eq!(path.last(), Some(&[4, 4]));
        for step in path.windows(2) {
            let [[r1, c1], [r2, c2]] = [step[0], step[1]];
            assert_eq!(r1.abs_diff(r2) + c1.abs_diff(c2), 1);
        }

        let big = generate(50, 50, &mut WyRand::seed_from_u64(seed));
        let path = big.shortest_path([0, 49], [49, 0]);
        assert_eq!(path.first(), Some(&[0, 49]));
        assert_eq!(path.last(), Some(&[49, 0]));
    }
}

#[test]
fn out_of_range() {
    let maze = generate(5, 5, &mut WyRand::seed_from_u64(0));
    assert!(maze.shortest_path([15, 0], [0, 10]).is_empty());
    assert!(maze.shortest_path([-1, 3], [15, -10]).is_empty());
}

#[test]
fn empty_mazes() {
    let mut rng = WyRand::seed_from_u64(0);
    for [rows, cols] in [[0, 0], [0, 1], [1, 0], [-10, -50]] {
        let maze = generate(rows, cols, &mut rng);
        assert!(maze.is_empty());
        assert_eq!(maze.size(), [0, 0]);
        assert!(maze.shortest_path([0, 0], [4, 4]).is_empty());

        let mut file = Vec::new();
        maze.write(&mut file).unwrap();
        assert!(file.is_empty());
    }
}

#[test]
fn malformed_files() {
    for text in ["0 0", "-3 4", "5 5\n", "5 5\n0 0 0 0 1\n", "two by two"] {
        let maze = MazeGrid::read(text.as_bytes());
        assert!(maze.is_empty(), "{text:?} was accepted");
        assert!(maze.shortest_path([0, 0], [0, 0]).is_empty());
    }
}

#[test]
fn corrupted_file_has_no_path() {
    // all walls up: every cell is isolated
    let maze = MazeGrid::read("2 2\n1 1\n1 1\n\n1 1\n1 1\n".as_bytes());
    assert_eq!(maze.size(), [2, 2]);
    assert!(maze.shortest_path([0, 0], [1, 1]).is_empty());
    assert_eq!(maze.shortest_path([1, 0], [1, 0]), vec![[1, 0]]);
    assert!(!maze.is_perfect());
}

#[test]
fn generated_file() {
    let maze = generate(3, 4, &mut WyRand::seed_from_u64(5));
    let mut file = Vec::new();
    maze.write(&mut file).unwrap();
    let text = String::from_utf8(file).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 3 + 1 + 3);
    assert_eq!(lines[0], "3 4");
    assert_eq!(lines[4], "");
    for line in lines[1..4].iter().chain(&lines[5..]) {
        let values: Vec<_> = line.split(' ').collect();
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| *v == "0" || *v == "1"));
    }
    // the last cell of each row is closed on the right, the last row on the bottom
    for line in &lines[1..4] {
        assert!(line.ends_with('1'));
    }
    assert_eq!(lines[7], "1 1 1 1");
}
