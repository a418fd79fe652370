use std::io::{self, Write};

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Helper function to read a line without echoing it, for PIN entry
pub fn read_masked() -> io::Result<String> {
    rpassword::read_password()
}

/// Helper function to prompt for input with confirmation
pub fn prompt_with_confirmation(prompt: &str, confirmation: &str) -> io::Result<bool> {
    println!("{}", prompt);
    print!("{} (y/n): ", confirmation);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim().to_lowercase();

    Ok(response.is_empty() || response == "y")
}
