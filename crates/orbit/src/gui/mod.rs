pub mod app;
pub mod scheduler;
pub mod stage;
pub mod theme;
pub mod window;
