use std::fs;
use std::path::PathBuf;
use pmgrid_core::io::{discover_batches, read_batch};
use pmgrid_core::{FieldBuilder, FieldConfig, BoundingBox};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pmgrid_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn discovers_csv_files_in_order() {
    let dir = scratch_dir("discover");
    fs::write(dir.join("b.csv"), "id,name,x,y,pm\n1,B,0.5,0.5,10\n").unwrap();
    fs::write(dir.join("a.csv"), "1,A,0.5,0.5,10\n2,A2,1.5,0.5,PM25_V\n").unwrap();
    fs::write(dir.join("notes.txt"), "1,A,0.5,0.5,10\n").unwrap();

    let batches = discover_batches(&dir).unwrap();
    let names: Vec<&str> = batches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["a.csv", "b.csv"]);
    assert_eq!(batches[0].rows.len(), 1);
    assert_eq!(batches[1].rows.len(), 1);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn gbk_names_and_invalid_rows_do_not_abort() {
    let dir = scratch_dir("gbk");
    let path = dir.join("mixed.csv");
    // "兰州" in GBK, then a quoted name containing the delimiter
    let mut bytes = b"1,\xc0\xbc\xd6\xdd,0.5,0.5,10\n2,B,abc,0.5,20\n".to_vec();
    bytes.extend_from_slice(b"3,C,1.5,1.5,30\n4,\"D, east\",0.5,1.5,40\n");
    fs::write(&path, bytes).unwrap();

    let batch = read_batch(&path).unwrap();
    assert_eq!(batch.rows.len(), 4);
    assert_eq!(batch.rows[0][1], "兰州");
    assert_eq!(batch.rows[3][1], "D, east");

    let config = FieldConfig::default()
        .with_bounds(BoundingBox::new(0.0, 0.0, 2.0))
        .with_slice_count(2)
        .with_iterations(1)
        .with_outlier_filter(false);
    let outcome = FieldBuilder::new(config).unwrap().build(&batch.name, &batch.rows).unwrap();
    assert_eq!(outcome.rejected_rows.len(), 1);
    assert_eq!(outcome.field.points().len(), 3);
    // the empty corner sees the other three cells
    assert_eq!(outcome.field.cell(1, 0).unwrap().value.value(), Some((10.0 + 40.0 + 30.0) / 3.0));
    fs::remove_dir_all(&dir).unwrap();
}
