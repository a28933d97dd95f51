#![allow(dead_code)]

pub mod http_stub;
pub mod splitprep_env;

use std::path::Path;

/// Write a small CSV with an `ID` column and a binary `label` column.
pub fn write_sample_csv(path: &Path) {
    std::fs::write(path, "ID,feature,label\n1,0.5,yes\n2,0.1,no\n3,0.9,yes\n")
        .expect("write sample csv");
}
