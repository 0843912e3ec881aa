use log::Level;

/// Testimonial carousel: period of the automatic advance.
pub const AUTO_ADVANCE_MS: u32 = 5_000;
/// Testimonial carousel: idle time after a manual navigation before autoplay resumes.
pub const RESUME_AFTER_MS: u32 = 10_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose carousel traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
