pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn is_palindrome(text: &str) -> bool {
    // Case and non-alphanumeric characters are ignored
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

pub fn help() -> String {
    let commands = [
        "/hello",
        "/reverse?text=abcdef",
        "/palindrome?text=racecar",
        "/questions (POST, markdown question document as body)",
        "/help",
    ];

    let mut output = String::from("Available commands:\n");
    for cmd in commands.iter() {
        output.push_str(&format!(" - {}\n", cmd));
    }

    output
}
