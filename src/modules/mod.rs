pub mod check_illegal_brush;
pub mod polysoup;
pub mod summary;
