pub mod errors;
pub mod db;
pub mod platform;
pub mod employee;
pub mod influencer;
pub mod social_media_account;

pub use platform::Platform;

#[cfg(test)]
mod tests;
