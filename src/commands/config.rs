use crate::core::{
    config::{config_file_path, Settings},
    error::Result,
    print_section_header, print_success,
};
use colored::*;

pub fn execute_config(
    root: Option<String>,
    show_hidden: Option<bool>,
    editor: Option<String>,
) -> Result<()> {
    let mut settings = Settings::load_or_create()?;

    if root.is_none() && show_hidden.is_none() && editor.is_none() {
        return show_settings(&settings);
    }

    if let Some(root) = root {
        settings.repository_directory = root;
    }
    if let Some(show_hidden) = show_hidden {
        settings.show_hidden_directories = show_hidden;
    }
    if let Some(editor) = editor {
        settings.editor = editor;
    }

    settings.save()?;
    print_success("Configuration updated");
    Ok(())
}

fn show_settings(settings: &Settings) -> Result<()> {
    print_section_header("Configuration");

    let root_display = if settings.repository_directory.trim().is_empty() {
        "(not set)".bright_black().to_string()
    } else {
        settings.repository_directory.white().to_string()
    };
    println!("{} {}", "Repository directory:".blue(), root_display);
    println!(
        "{} {}",
        "Show hidden directories:".blue(),
        settings.show_hidden_directories.to_string().white()
    );
    println!("{} {}", "Editor:".blue(), settings.editor.white());

    println!(
        "\n{}",
        format!("Settings file: {}", config_file_path()?.display()).bright_black()
    );
    println!();

    Ok(())
}
