pub mod session_reducer;
pub mod splash_reducer;
