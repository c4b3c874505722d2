pub mod err;

pub mod views;
