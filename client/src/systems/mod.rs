pub mod audio;
pub mod input;
pub mod sync;
pub mod ui;
