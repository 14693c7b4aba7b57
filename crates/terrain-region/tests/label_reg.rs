//! Region labeling regression test
//!
//! Labels the sample grids under both connectivity rules and checks the
//! labeled output against golden files.
//!
//! Run with:
//! ```
//! cargo test -p terrain-region --test label_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p terrain-region --test label_reg
//! ```

use terrain_core::Connectivity;
use terrain_region::{label_all, region_sizes};
use terrain_test::{RegParams, load_test_grid};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    let input = load_test_grid("terrain1.txt").expect("load terrain1.txt");

    // --- Test 1: terrain1 with 4-way connectivity ---
    let mut grid4 = input.grid.clone();
    let stats4 = label_all(&mut grid4, Connectivity::FourWay);
    rp.write_grid_and_check(&grid4).expect("write terrain1 4-way"); // 1
    rp.compare_values(3.0, stats4.region_count as f64, 0.0); // 2
    rp.compare_values(12.0, stats4.navigable_cells as f64, 0.0); // 3
    rp.compare_values(8.0, stats4.obstacle_cells as f64, 0.0); // 4

    let sizes = region_sizes(&grid4);
    eprintln!("  terrain1 4-way sizes: {:?}", sizes);
    rp.compare_values(5.0, sizes[0] as f64, 0.0); // 5
    rp.compare_values(4.0, sizes[1] as f64, 0.0); // 6
    rp.compare_values(3.0, sizes[2] as f64, 0.0); // 7

    // --- Test 2: terrain1 with 8-way connectivity ---
    // The bottom strip touches the left blob diagonally at (2,1)-(3,2)
    let mut grid8 = input.grid.clone();
    let stats8 = label_all(&mut grid8, Connectivity::EightWay);
    rp.write_grid_and_check(&grid8).expect("write terrain1 8-way"); // 8
    rp.compare_values(2.0, stats8.region_count as f64, 0.0); // 9

    // --- Test 3: field with 4-way connectivity ---
    let field = load_test_grid("field.txt").expect("load field.txt");
    let mut field4 = field.grid.clone();
    let fstats4 = label_all(&mut field4, Connectivity::FourWay);
    rp.write_grid_and_check(&field4).expect("write field 4-way"); // 10
    rp.compare_values(5.0, fstats4.region_count as f64, 0.0); // 11
    rp.compare_values(60.0, fstats4.navigable_cells as f64, 0.0); // 12
    rp.compare_values(36.0, fstats4.obstacle_cells as f64, 0.0); // 13

    // --- Test 4: field with 8-way connectivity ---
    let mut field8 = field.grid.clone();
    let fstats8 = label_all(&mut field8, Connectivity::EightWay);
    rp.write_grid_and_check(&field8).expect("write field 8-way"); // 14
    rp.compare_values(2.0, fstats8.region_count as f64, 0.0); // 15
    rp.compare_values(57.0, region_sizes(&field8)[1] as f64, 0.0); // 16

    // 8-way never finds more regions than 4-way
    assert!(
        fstats8.region_count <= fstats4.region_count,
        "8-way regions ({}) should be <= 4-way regions ({})",
        fstats8.region_count,
        fstats4.region_count
    );

    assert!(rp.cleanup(), "label regression test failed");
}
