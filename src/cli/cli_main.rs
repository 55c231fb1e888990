use crate::Examples::translation_examples::translation_examples;
use crate::Translation::model_assembler::generate;
use crate::library_manager::{CONFIG_FILE, ConfigManager};
use log::error;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    let mut manager = ConfigManager::new();
    loop {
        show_main_menu(manager.config_file());
        let choice = get_user_input();

        match choice.trim() {
            "1" => generate_from_config(&manager),
            "2" => settings_menu(&mut manager),
            "3" => demo_menu(),
            "4" => match ConfigManager::write_template(CONFIG_FILE) {
                Ok(()) => println!("Default configuration written to {}", CONFIG_FILE),
                Err(e) => error!("cannot write {}: {}", CONFIG_FILE, e),
            },
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - header
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompt
Reset (\x1b[0m)
*/
fn show_main_menu(config_file: &str) {
    println!(
        "\x1b[34m\n RiboNet: reaction networks of bacterial protein translation\n config: {}\n\x1b[0m",
        config_file
    );
    println!("\x1b[33m1. Generate model from configuration\x1b[0m");
    println!("\x1b[33m2. Settings\x1b[0m");
    println!("\x1b[33m3. Demo networks\x1b[0m");
    println!("\x1b[33m4. Write default configuration\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

fn get_user_input() -> String {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_line(&mut input) {
        error!("failed to read input: {}", e);
    }
    input
}

fn generate_from_config(manager: &ConfigManager) {
    match generate(manager.get_config()) {
        Ok(model) => {
            model.pretty_print();
            println!("Model written to {}", manager.get_config().output);
        }
        Err(e) => error!("generation failed: {}", e),
    }
}

fn settings_menu(manager: &mut ConfigManager) {
    loop {
        let config = manager.get_config();
        println!("\x1b[33m1. Protein table     [{}]\x1b[0m", config.protein_table);
        println!(
            "\x1b[33m2. Transcript table  [{}]\x1b[0m",
            config.transcript_table.as_deref().unwrap_or("none")
        );
        println!(
            "\x1b[33m3. Carrier table     [{}]\x1b[0m",
            config.carrier_table.as_deref().unwrap_or("built-in")
        );
        println!("\x1b[33m4. Output file       [{}]\x1b[0m", config.output);
        println!("\x1b[33m5. Reset to defaults\x1b[0m");
        println!("\x1b[33m0. Back\x1b[0m");
        prompt("Enter your choice: ");
        let choice = get_user_input();
        let result = match choice.trim() {
            "1" => manager.set_protein_table(&ask_path()),
            "2" => manager.set_transcript_table(&ask_path()),
            "3" => manager.set_carrier_table(&ask_path()),
            "4" => manager.set_output(&ask_path()),
            "5" => manager.reset_to_defaults(),
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("{}", e);
        }
    }
}

fn ask_path() -> String {
    prompt("Path: ");
    get_user_input().trim().to_string()
}

fn demo_menu() {
    println!("\x1b[33m0. Protein AR with two arginine tRNAs\x1b[0m");
    println!("\x1b[33m1. Three M. genitalium proteins\x1b[0m");
    prompt("Enter demo number: ");
    match get_user_input().trim().parse::<usize>() {
        Ok(task) => {
            if let Err(e) = translation_examples(task) {
                println!("{}", e);
            }
        }
        Err(_) => println!("Invalid choice. Please try again."),
    }
}
