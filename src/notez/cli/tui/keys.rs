//! Terminal keys to [`KeyEvent`]s.
//!
//! In raw mode a terminal sends Ctrl+letter as the matching control byte
//! (`0x01` for `a` through `0x1a` for `z`) and reports Shift only through the
//! case of the letter. Tab, Enter and Backspace share bytes with Ctrl+I, Ctrl+M
//! and Ctrl+H and are always read as the named keys.

use console::Key;
use notez::shortcuts::KeyEvent;

pub fn translate(key: &Key) -> Option<KeyEvent> {
    let event = match key {
        Key::Char(c) => from_char(*c),
        Key::Escape => KeyEvent::new("Escape"),
        Key::Enter => KeyEvent::new("Enter"),
        Key::Backspace => KeyEvent::new("Backspace"),
        Key::Del => KeyEvent::new("Delete"),
        Key::Tab => KeyEvent::new("Tab"),
        Key::BackTab => KeyEvent::new("Tab").shift(),
        Key::ArrowUp => KeyEvent::new("ArrowUp"),
        Key::ArrowDown => KeyEvent::new("ArrowDown"),
        Key::ArrowLeft => KeyEvent::new("ArrowLeft"),
        Key::ArrowRight => KeyEvent::new("ArrowRight"),
        Key::Home => KeyEvent::new("Home"),
        Key::End => KeyEvent::new("End"),
        _ => return None,
    };
    Some(event)
}

fn from_char(c: char) -> KeyEvent {
    let code = u32::from(c);
    if (1..=26).contains(&code) && !matches!(c, '\t' | '\n' | '\r' | '\x08') {
        let letter = char::from(b'a' + (code - 1) as u8);
        return KeyEvent::new(letter.to_string()).ctrl();
    }

    let event = KeyEvent::new(c.to_string());
    if c.is_uppercase() {
        event.shift()
    } else {
        event
    }
}
