pub mod activation;
pub mod dialog;
pub mod footer;
pub mod language_switcher;
pub mod verification;
