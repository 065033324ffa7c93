pub mod balloons;
pub mod form;
pub mod presenter;
