//! 单元测试模块
//! 覆盖效果映射、头部视图契约、分页滚动、画布与图片数据

pub mod canvas_tests;
pub mod header_tests;
pub mod pixmap_tests;
