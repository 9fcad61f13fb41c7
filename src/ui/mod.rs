use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io::{self, Write};
use std::time::Duration;

/// Raw-mode line input. Enter on an empty line returns `default`.
pub fn read_input_raw(default: &str, prompt: &str) -> anyhow::Result<String> {
    print!("{}: (Default: {}) \r\n> ", prompt, default);
    io::stdout().flush()?;

    let mut input = String::new();
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => {
                        print!("\r\n");
                        if input.is_empty() {
                            return Ok(default.to_string());
                        } else {
                            return Ok(input);
                        }
                    }
                    KeyCode::Char(c) => {
                        input.push(c);
                        print!("{}", c);
                        io::stdout().flush()?;
                    }
                    KeyCode::Backspace => {
                        if !input.is_empty() {
                            input.pop();
                            print!("\u{0008} \u{0008}");
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Esc => {
                        return Err(anyhow::anyhow!("Canceled"));
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Prompts until the input parses as a number; Enter keeps `default`.
pub fn read_number(default: usize, prompt: &str) -> anyhow::Result<usize> {
    loop {
        let raw = read_input_raw(&default.to_string(), prompt)?;
        match parse_number(&raw) {
            Some(n) => return Ok(n),
            None => print!("Invalid input. Please enter an integer.\r\n"),
        }
    }
}

pub fn parse_number(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Waits for one of `keys`; `None` on `q`.
pub fn wait_for_choice(keys: &[char]) -> anyhow::Result<Option<char>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(None),
                    KeyCode::Char(c) if keys.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

pub fn wait_for_any_key() -> anyhow::Result<()> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
