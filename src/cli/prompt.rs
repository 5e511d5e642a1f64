use crate::panel::Confirm;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Blocking yes/no prompt on stdin. Anything but `y`/`yes` is a no,
/// including EOF or a read error.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        warning(prompt);
        print!("Confirm [y/N]: ");
        io::stdout().flush().ok();

        let mut s = String::new();
        match io::stdin().lock().read_line(&mut s) {
            Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}
