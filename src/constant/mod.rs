mod biz_const;

pub use biz_const::*;
