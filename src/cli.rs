/// interactive terminal menu, started when the binary runs without arguments
pub mod cli_main;
