#[allow(non_snake_case)]
pub mod Document;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Translation;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod library_manager;
