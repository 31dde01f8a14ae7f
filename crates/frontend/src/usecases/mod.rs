pub mod u508_compare_rows;
