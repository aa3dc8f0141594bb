pub mod assets;
pub mod logo_upload;
pub mod preview;
